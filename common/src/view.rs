//! 社員・曜日による絞り込み表示

use crate::types::{MasterMap, Value};
use crate::weekday::Weekday;

pub const MSG_NO_ENTRIES: &str = "Нет данных.";
pub const MSG_NO_DATA_FOR_SELECTION: &str = "Нет данных для выбранных опций.";
pub const MSG_SELECTION_INCOMPLETE: &str = "Пожалуйста, выберите сотрудника и день недели.";
pub const MSG_EMPTY_MAP: &str = "Нет данных для отображения.";

/// 絞り込み結果
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome<'a> {
    /// 該当エントリ（1件以上）
    Entries(&'a [Value]),
    /// 組は存在するがエントリが空
    NoEntries,
    /// 社員・曜日の組が存在しない
    NoDataForSelection,
    /// 社員か曜日が未選択
    SelectionIncomplete,
}

impl ViewOutcome<'_> {
    /// 組が解決できたか（比較リンクの表示条件）
    pub fn is_resolved(&self) -> bool {
        matches!(self, ViewOutcome::Entries(_) | ViewOutcome::NoEntries)
    }

    /// エントリ一覧以外の結果に対応するメッセージ
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ViewOutcome::Entries(_) => None,
            ViewOutcome::NoEntries => Some(MSG_NO_ENTRIES),
            ViewOutcome::NoDataForSelection => Some(MSG_NO_DATA_FOR_SELECTION),
            ViewOutcome::SelectionIncomplete => Some(MSG_SELECTION_INCOMPLETE),
        }
    }
}

/// 選択中の社員・曜日でマップを絞り込む（空白のみの社員名は未選択扱い）
pub fn select<'a>(map: &'a MasterMap, employee: Option<&str>, day: Option<Weekday>) -> ViewOutcome<'a> {
    let employee = employee.map(str::trim).filter(|e| !e.is_empty());

    let (Some(employee), Some(day)) = (employee, day) else {
        return ViewOutcome::SelectionIncomplete;
    };

    match map.entries(employee, day) {
        Some([]) => ViewOutcome::NoEntries,
        Some(entries) => ViewOutcome::Entries(entries),
        None => ViewOutcome::NoDataForSelection,
    }
}
