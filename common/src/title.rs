//! シートタイトル
//!
//! 月曜シートの日付セルから「Таблица от: DD.MM.YYYY」を組み立てる。

use chrono::NaiveDate;

/// 日付が得られない場合の表示
pub const PLACEHOLDER_TITLE: &str = "Название таблицы";

pub fn sheet_title(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("Таблица от: {}", date.format("%d.%m.%Y")),
        None => PLACEHOLDER_TITLE.to_string(),
    }
}
