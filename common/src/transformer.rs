//! シート行 → MasterMap 変換
//!
//! 各曜日シートの1列目を社員名、2列目以降をその曜日のエントリとして扱う。

use crate::error::{Error, Result};
use crate::types::{EntryList, Grid, MasterMap, Row};
use crate::weekday::Weekday;

/// 曜日シートのグリッド群から MasterMap を構築
///
/// - 行が0件のシートはスキップ
/// - 社員名が空の行はスキップ
/// - 同じシートに同じ社員が複数行ある場合は後の行で上書き
///
/// 社員が一人も得られなければ `Error::EmptyResult`。
pub fn build_master_map(sheets: &[(Weekday, Grid)]) -> Result<MasterMap> {
    let mut map = MasterMap::new();

    for (day, grid) in sheets {
        if grid.is_empty() {
            continue;
        }

        for row in grid {
            let Some(employee) = employee_name(row) else {
                continue;
            };
            map.ensure_employee(employee).insert(*day, row_entries(row));
        }
    }

    if map.is_empty() {
        return Err(Error::EmptyResult);
    }

    Ok(map)
}

/// 1列目の社員名（trim済み）。空白・未入力なら `None`
fn employee_name(row: &Row) -> Option<String> {
    let value = row.first()?.as_ref()?;
    let name = value.to_string();
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// 2列目以降の空でないセル（列順）
fn row_entries(row: &Row) -> EntryList {
    row.iter()
        .skip(1)
        .flatten()
        .filter(|value| !value.is_blank())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    fn text(s: &str) -> Option<Value> {
        Some(Value::from(s))
    }

    #[test]
    fn test_blank_and_null_cells_removed() {
        let grid = vec![vec![text("Alice"), text(""), text("9:00"), None, text("10:00")]];
        let map = build_master_map(&[(Weekday::Mon, grid)]).unwrap();

        assert_eq!(
            map.entries("Alice", Weekday::Mon),
            Some(&[Value::from("9:00"), Value::from("10:00")][..])
        );
    }

    #[test]
    fn test_all_names_blank_is_empty_result() {
        let grid = vec![
            vec![None, text("9:00")],
            vec![text("   "), text("10:00")],
            vec![text(""), None],
        ];
        let err = build_master_map(&[(Weekday::Tue, grid)]).unwrap_err();
        assert!(matches!(err, Error::EmptyResult));
    }

    #[test]
    fn test_no_sheets_is_empty_result() {
        assert!(matches!(build_master_map(&[]), Err(Error::EmptyResult)));
        assert!(matches!(
            build_master_map(&[(Weekday::Mon, Vec::new())]),
            Err(Error::EmptyResult)
        ));
    }

    #[test]
    fn test_duplicate_employee_last_row_wins() {
        let grid = vec![
            vec![text("Alice"), text("9:00"), text("11:00")],
            vec![text("Bob"), text("12:00")],
            vec![text("Alice"), text("15:00")],
        ];
        let map = build_master_map(&[(Weekday::Wed, grid)]).unwrap();

        assert_eq!(map.entries("Alice", Weekday::Wed), Some(&[Value::from("15:00")][..]));
        assert_eq!(map.entries("Bob", Weekday::Wed), Some(&[Value::from("12:00")][..]));
    }

    #[test]
    fn test_employee_collected_across_days() {
        let monday = vec![vec![text("Alice"), text("9:00")]];
        let friday = vec![
            vec![text("Alice"), None, None],
            vec![text("Carol"), Some(Value::Number(8.0))],
        ];
        let map = build_master_map(&[(Weekday::Mon, monday), (Weekday::Fri, friday)]).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.entries("Alice", Weekday::Mon), Some(&[Value::from("9:00")][..]));
        // 行はあるがエントリなし → 空リストとして残る
        assert_eq!(map.entries("Alice", Weekday::Fri), Some(&[][..]));
        assert_eq!(map.entries("Carol", Weekday::Mon), None);
        assert_eq!(map.entries("Carol", Weekday::Fri), Some(&[Value::Number(8.0)][..]));
    }

    #[test]
    fn test_employee_name_trimmed_and_numeric() {
        let grid = vec![
            vec![text("  Alice "), text("x")],
            vec![Some(Value::Number(42.0)), text("y")],
        ];
        let map = build_master_map(&[(Weekday::Thu, grid)]).unwrap();

        assert!(map.contains_employee("Alice"));
        assert!(map.contains_employee("42"));
    }

    #[test]
    fn test_entry_text_kept_as_is() {
        let grid = vec![vec![text("Alice"), text(" 9:00 ")]];
        let map = build_master_map(&[(Weekday::Mon, grid)]).unwrap();
        assert_eq!(map.entries("Alice", Weekday::Mon), Some(&[Value::from(" 9:00 ")][..]));
    }
}
