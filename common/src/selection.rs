//! 初期選択ルール
//!
//! 曜日は今日（平日なら）、社員は前回選択した人（まだ存在すれば）。

use crate::types::MasterMap;
use crate::weekday::Weekday;

/// 曜日番号（日曜=0）から初期曜日を決める。土日は月曜
pub fn default_day(ordinal: u32) -> Weekday {
    Weekday::from_ordinal(ordinal).unwrap_or(Weekday::Mon)
}

/// 社員の選択肢（昇順）
pub fn employee_options(map: &MasterMap) -> Vec<&str> {
    map.employees().collect()
}

/// 記憶している社員がマップに残っていれば復元
pub fn restore_employee<'a>(map: &'a MasterMap, remembered: Option<&str>) -> Option<&'a str> {
    let remembered = remembered?;
    map.employees().find(|name| *name == remembered)
}

/// 表示に使う選択状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub employee: Option<String>,
    pub day: Weekday,
}

/// 明示指定 → 記憶値 → 既定値 の順に選択を決める
///
/// 明示指定された社員はマップに無くてもそのまま使う（表示側で「該当なし」になる）。
pub fn resolve_selection(
    map: &MasterMap,
    explicit_employee: Option<&str>,
    remembered_employee: Option<&str>,
    explicit_day: Option<Weekday>,
    today_ordinal: u32,
) -> Selection {
    let employee = explicit_employee
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .or_else(|| restore_employee(map, remembered_employee))
        .map(str::to_string);

    Selection {
        employee,
        day: explicit_day.unwrap_or_else(|| default_day(today_ordinal)),
    }
}
