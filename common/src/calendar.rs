//! 日付ユーティリティ
//!
//! Excelのシリアル値変換と、ロシア語の長い日付表記。

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

const WEEKDAYS_RU: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];

// 日付と組み合わせるので生格
const MONTHS_RU: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// 9999-12-31 のシリアル値
const MAX_SERIAL_DAYS: i64 = 2_958_465;

/// Excelシリアル値（1900年基準）を日時に変換
///
/// 1900-02-29（シリアル値60、実在しない日）は 1900-03-01 として扱う。
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let mut days = serial.trunc() as i64;
    let mut seconds = ((serial - serial.trunc()) * 86_400.0).round() as i64;
    if seconds >= 86_400 {
        days += 1;
        seconds -= 86_400;
    }
    if days > MAX_SERIAL_DAYS {
        return None;
    }

    // 1900年うるう年バグ: 61以降は1日ずれる
    let base = if days < 61 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    let date = base.checked_add_signed(TimeDelta::try_days(days)?)?;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0)?;
    Some(date.and_time(time))
}

pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    excel_serial_to_datetime(serial).map(|dt| dt.date())
}

/// 日付・時刻書式のセルを表示用文字列に変換
///
/// - 1未満（時刻のみ）: `H:MM`
/// - 整数（日付のみ）: `DD.MM.YYYY`
/// - それ以外: `DD.MM.YYYY H:MM`
pub fn format_cell_datetime(serial: f64) -> String {
    let Some(dt) = excel_serial_to_datetime(serial) else {
        return serial.to_string();
    };

    if serial < 1.0 {
        dt.format("%-H:%M").to_string()
    } else if dt.time() == NaiveTime::MIN {
        dt.format("%d.%m.%Y").to_string()
    } else {
        dt.format("%d.%m.%Y %-H:%M").to_string()
    }
}

/// 経過時間（日単位）を `H:MM` に変換。24時間を超えても日付にしない
pub fn format_duration(days: f64) -> String {
    if !days.is_finite() {
        return days.to_string();
    }

    let minutes = (days * 24.0 * 60.0).round() as i64;
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!("{}{}:{:02}", sign, minutes / 60, minutes % 60)
}

/// 「Пятница, 16 октября 2026 г.」形式（先頭大文字）
pub fn format_long_ru(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_RU[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_RU[date.month0() as usize];
    let text = format!("{}, {} {} {} г.", weekday, date.day(), month, date.year());
    capitalize_first(&text)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
