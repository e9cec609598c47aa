//! シートリンクの検証
//!
//! `https://docs.google.com/spreadsheets/d/<ID>/edit` の `<ID>` を取り出す。

use crate::error::{Result, ShiftBoardError};
use regex::Regex;

/// Googleスプレッドシートの識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetId(String);

impl SheetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// パス中の `/d/<ID>` からIDを抽出
pub fn extract_sheet_id(url: &str) -> Option<SheetId> {
    lazy_static::lazy_static! {
        static ref SHEET_ID_RE: Regex = Regex::new(r"/d/([a-zA-Z0-9\-_]+)").unwrap();
    }

    SHEET_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| SheetId(m.as_str().to_string()))
}

/// 入力リンクを検証してIDを返す（trim後の値で判定）
pub fn validate_link(link: &str) -> Result<SheetId> {
    let link = link.trim();
    if link.is_empty() {
        return Err(ShiftBoardError::EmptyLink);
    }
    extract_sheet_id(link).ok_or_else(|| ShiftBoardError::InvalidLink(link.to_string()))
}
