//! 端末向けの表示

use chrono::NaiveDate;
use shift_board_common::calendar::format_long_ru;
use shift_board_common::view::{MSG_EMPTY_MAP, MSG_NO_ENTRIES};
use shift_board_common::{MasterMap, Value, ViewOutcome, Weekday};
use std::fmt::Write;

const SNOW_BANNER: &str = "❄  ❄  ❄  ❄  ❄";

/// 日付・タイトル（・雪の飾り）の見出し
pub fn render_header(today: NaiveDate, title: &str, snowflakes: bool) -> String {
    let mut out = String::new();
    if snowflakes {
        let _ = writeln!(out, "{}", SNOW_BANNER);
    }
    let _ = writeln!(out, "{}", format_long_ru(today));
    let _ = writeln!(out, "{}", title);
    out
}

fn render_values(out: &mut String, values: &[Value]) {
    for value in values {
        let _ = writeln!(out, "  • {}", value);
    }
}

/// 絞り込み結果。組が解決できた場合のみ比較リンクを出す
pub fn render_outcome(
    outcome: &ViewOutcome<'_>,
    employee: Option<&str>,
    day: Weekday,
    compare_link: Option<&str>,
) -> String {
    let mut out = String::new();

    if outcome.is_resolved() {
        if let Some(employee) = employee {
            let _ = writeln!(out, "👤 {} — {}", employee, day);
        }
    }

    match outcome {
        ViewOutcome::Entries(values) => render_values(&mut out, values),
        other => {
            if let Some(message) = other.message() {
                let _ = writeln!(out, "{}", message);
            }
        }
    }

    if outcome.is_resolved() {
        if let Some(link) = compare_link {
            let _ = writeln!(out, "\n🔗 Сверить с таблицей: {}", link);
        }
    }

    out
}

/// 全社員・全曜日の一覧
pub fn render_all(map: &MasterMap) -> String {
    if map.is_empty() {
        return format!("{}\n", MSG_EMPTY_MAP);
    }

    let mut out = String::new();
    for (employee, days) in map.iter() {
        let _ = writeln!(out, "👤 {}", employee);
        for (day, values) in days {
            let _ = writeln!(out, " [{}]", day);
            if values.is_empty() {
                let _ = writeln!(out, "  {}", MSG_NO_ENTRIES);
            } else {
                render_values(&mut out, values);
            }
        }
        out.push('\n');
    }
    out
}

/// 社員一覧（記憶中の社員に印）
pub fn render_employees(map: &MasterMap, remembered: Option<&str>) -> String {
    let mut out = String::new();
    for employee in map.employees() {
        let marker = if Some(employee) == remembered { "→" } else { " " };
        let _ = writeln!(out, "{} {}", marker, employee);
    }
    out
}
