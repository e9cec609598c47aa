//! ワークブック → 曜日別グリッド
//!
//! calamineでxlsxをメモリ上から開き、曜日名のシートだけを
//! 指定セル範囲で切り出す。空白セルは `None`、全セル空白の行は除外。

use crate::error::{Result, ShiftBoardError};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use chrono::NaiveDate;
use regex::Regex;
use shift_board_common::calendar::{excel_serial_to_date, format_cell_datetime, format_duration};
use shift_board_common::{Cell, Grid, Row, Value, Weekday};
use std::io::Cursor;

/// A1形式のセル参照（0始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl std::str::FromStr for CellRef {
    type Err = ShiftBoardError;

    fn from_str(s: &str) -> Result<Self> {
        lazy_static::lazy_static! {
            static ref A1_RE: Regex = Regex::new(r"^([A-Za-z]{1,3})([1-9][0-9]{0,6})$").unwrap();
        }

        let invalid = || ShiftBoardError::InvalidRange(s.to_string());
        let caps = A1_RE.captures(s.trim()).ok_or_else(invalid)?;

        let col = caps[1]
            .to_ascii_uppercase()
            .bytes()
            .fold(0u32, |acc, b| acc * 26 + u32::from(b - b'A' + 1));
        let row: u32 = caps[2].parse().map_err(|_| invalid())?;

        Ok(CellRef {
            row: row - 1,
            col: col - 1,
        })
    }
}

/// A1形式のセル範囲（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl std::str::FromStr for CellRange {
    type Err = ShiftBoardError;

    /// `B5:M50` または単一セル `B1`
    fn from_str(s: &str) -> Result<Self> {
        let (a, b) = match s.split_once(':') {
            Some((a, b)) => (a.parse::<CellRef>()?, b.parse::<CellRef>()?),
            None => {
                let cell = s.parse::<CellRef>()?;
                (cell, cell)
            }
        };

        Ok(CellRange {
            start: CellRef {
                row: a.row.min(b.row),
                col: a.col.min(b.col),
            },
            end: CellRef {
                row: a.row.max(b.row),
                col: a.col.max(b.col),
            },
        })
    }
}

/// デコード結果
#[derive(Debug, Clone, Default)]
pub struct DecodedWorkbook {
    /// 見つかった曜日シートのみ（月→金）
    pub sheets: Vec<(Weekday, Grid)>,
    /// 月曜シートの日付セル
    pub title_date: Option<NaiveDate>,
}

/// xlsxバイト列をデコード
pub fn decode_workbook(bytes: &[u8], window: &CellRange, title_cell: CellRef) -> Result<DecodedWorkbook> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let sheet_names = workbook.sheet_names();

    let mut decoded = DecodedWorkbook::default();

    for day in Weekday::ALL {
        if !sheet_names.iter().any(|name| name == day.label()) {
            continue;
        }

        let range = workbook.worksheet_range(day.label())?;

        if day == Weekday::Mon {
            decoded.title_date = range.get_value((title_cell.row, title_cell.col)).and_then(cell_date);
        }

        decoded.sheets.push((day, extract_grid(&range, window)));
    }

    Ok(decoded)
}

/// 範囲内の行を取り出す（全セル空白の行は除外）
pub fn extract_grid(range: &Range<Data>, window: &CellRange) -> Grid {
    let Some(end) = range.end() else {
        return Vec::new();
    };

    let last_row = window.end.row.min(end.0);
    let mut grid = Vec::new();

    for row_idx in window.start.row..=last_row {
        let row: Row = (window.start.col..=window.end.col)
            .map(|col_idx| range.get_value((row_idx, col_idx)).and_then(convert_cell))
            .collect();

        if row.iter().any(Option::is_some) {
            grid.push(row);
        }
    }

    grid
}

/// calamineのセル値を変換（空セルは `None`）
pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => None,
        Data::String(s) => Some(Value::Text(s.clone())),
        Data::Float(f) => Some(Value::Number(*f)),
        Data::Int(i) => Some(Value::Number(*i as f64)),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(dt) if dt.is_duration() => Some(Value::Text(format_duration(dt.as_f64()))),
        Data::DateTime(dt) => Some(Value::Text(format_cell_datetime(dt.as_f64()))),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::Text(s.clone())),
        Data::Error(e) => Some(Value::Text(e.to_string())),
    }
}

/// タイトル用の日付セル。数値（シリアル値）とISO文字列のみ受け付ける
fn cell_date(data: &Data) -> Option<NaiveDate> {
    match data {
        Data::Float(f) if *f > 0.0 => excel_serial_to_date(*f),
        Data::Int(i) if *i > 0 => excel_serial_to_date(*i as f64),
        Data::DateTime(dt) if !dt.is_duration() && dt.as_f64() > 0.0 => {
            excel_serial_to_date(dt.as_f64())
        }
        Data::DateTimeIso(s) => NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Cell as CalamineCell;
    use calamine::{ExcelDateTime, ExcelDateTimeType};

    fn text(s: &str) -> Cell {
        Some(Value::from(s))
    }

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!("A1".parse::<CellRef>().unwrap(), CellRef { row: 0, col: 0 });
        assert_eq!("b5".parse::<CellRef>().unwrap(), CellRef { row: 4, col: 1 });
        assert_eq!("AA10".parse::<CellRef>().unwrap(), CellRef { row: 9, col: 26 });
        assert!("A0".parse::<CellRef>().is_err());
        assert!("5B".parse::<CellRef>().is_err());
    }

    #[test]
    fn test_parse_cell_range() {
        let range: CellRange = "B5:M50".parse().unwrap();
        assert_eq!(range.start, CellRef { row: 4, col: 1 });
        assert_eq!(range.end, CellRef { row: 49, col: 12 });

        // 逆順指定は正規化
        let reversed: CellRange = "M50:B5".parse().unwrap();
        assert_eq!(reversed, range);

        let single: CellRange = "B1".parse().unwrap();
        assert_eq!(single.start, single.end);

        assert!(matches!(
            "B5-M50".parse::<CellRange>(),
            Err(ShiftBoardError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_extract_grid_window_and_blank_rows() {
        // 絶対座標 (行, 列)
        let cells = vec![
            CalamineCell::new((0, 1), Data::Float(45292.0)),
            CalamineCell::new((4, 1), Data::String("Alice".into())),
            CalamineCell::new((4, 3), Data::String("9:00".into())),
            CalamineCell::new((6, 1), Data::String("Bob".into())),
            CalamineCell::new((6, 2), Data::Int(7)),
            CalamineCell::new((6, 20), Data::String("out of window".into())),
        ];
        let range = Range::from_sparse(cells);
        let window: CellRange = "B5:D50".parse().unwrap();

        let grid = extract_grid(&range, &window);

        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec![text("Alice"), None, text("9:00")]);
        assert_eq!(grid[1], vec![text("Bob"), Some(Value::Number(7.0)), None]);
    }

    #[test]
    fn test_extract_grid_empty_range() {
        let range: Range<Data> = Range::from_sparse(Vec::new());
        let window: CellRange = "B5:M50".parse().unwrap();
        assert!(extract_grid(&range, &window).is_empty());
    }

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), None);
        assert_eq!(convert_cell(&Data::Int(3)), Some(Value::Number(3.0)));
        assert_eq!(convert_cell(&Data::Bool(true)), Some(Value::Bool(true)));
        assert_eq!(convert_cell(&Data::String("x".into())), text("x"));
    }

    #[test]
    fn test_convert_datetime_and_duration() {
        let time = ExcelDateTime::new(0.375, ExcelDateTimeType::DateTime, false);
        assert_eq!(convert_cell(&Data::DateTime(time)), text("9:00"));

        // 36時間の経過時間は日付にしない
        let duration = ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false);
        assert_eq!(convert_cell(&Data::DateTime(duration)), text("36:00"));
        assert_eq!(cell_date(&Data::DateTime(duration)), None);
    }

    #[test]
    fn test_cell_date() {
        assert_eq!(cell_date(&Data::Float(45292.0)), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(cell_date(&Data::Float(0.0)), None);
        assert_eq!(cell_date(&Data::String("понедельник".into())), None);
        assert_eq!(
            cell_date(&Data::DateTimeIso("2026-03-02T00:00:00".into())),
            NaiveDate::from_ymd_opt(2026, 3, 2)
        );
    }
}
