//! シフト表の型定義
//!
//! - Value: 空でないセル値
//! - Grid: シート1枚分のセル範囲（行の並び）
//! - MasterMap: 社員名 → 曜日 → エントリ一覧

use crate::error::{Error, Result};
use crate::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// セル値（数値・文字列・真偽値）
///
/// 保存時はJSONの素の値としてそのまま書き出す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// 文字列化してtrimした結果が空かどうか
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Text(s) => s.trim().is_empty(),
            Value::Number(_) | Value::Bool(_) => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            // 整数値は小数点なしで表示（9.0 ではなく 9）
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// セル（`None` は空白セル）
pub type Cell = Option<Value>;

/// 1行分のセル
pub type Row = Vec<Cell>;

/// シート1枚分のセル範囲
pub type Grid = Vec<Row>;

/// 社員1人・1曜日分のエントリ（列順を保持）
pub type EntryList = Vec<Value>;

/// 社員1人分の曜日別エントリ
pub type DaySchedule = BTreeMap<Weekday, EntryList>;

/// 社員名 → 曜日 → エントリ一覧
///
/// 取り込みのたびに作り直され、前回分とはマージしない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MasterMap(BTreeMap<String, DaySchedule>);

impl MasterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 社員数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 社員名（昇順）
    pub fn employees(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn contains_employee(&self, employee: &str) -> bool {
        self.0.contains_key(employee)
    }

    pub fn schedule(&self, employee: &str) -> Option<&DaySchedule> {
        self.0.get(employee)
    }

    /// 社員・曜日の組に対応するエントリ。組が存在しなければ `None`
    pub fn entries(&self, employee: &str, day: Weekday) -> Option<&[Value]> {
        self.0
            .get(employee)
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DaySchedule)> {
        self.0.iter().map(|(name, days)| (name.as_str(), days))
    }

    /// 社員の曜日エントリを設定（同じ曜日は上書き）
    pub fn set_entries(&mut self, employee: impl Into<String>, day: Weekday, entries: EntryList) {
        self.ensure_employee(employee).insert(day, entries);
    }

    /// 初出の社員なら空の曜日マップを作成
    pub fn ensure_employee(&mut self, employee: impl Into<String>) -> &mut DaySchedule {
        self.0.entry(employee.into()).or_default()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 保存済みJSONから復元。壊れていれば `StoredDataCorrupt`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::StoredDataCorrupt)
    }
}
