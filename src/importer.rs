//! 取り込み処理
//!
//! 取得 → デコード → 変換 → 保存 を順に行う。途中で失敗した場合は
//! 保存済みデータに触れない。

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::{GoogleSheetSource, SheetSource};
use crate::grid::{self, CellRange, CellRef};
use crate::link;
use shift_board_common::{build_master_map, sheet_title, ScheduleStore, Storage, Weekday};

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// 各曜日シートの読み取り範囲
    pub window: CellRange,
    /// 月曜シートのタイトル日付セル
    pub title_cell: CellRef,
    pub verbose: bool,
}

impl ImportOptions {
    /// 設定値から作成（範囲は引数指定を優先）
    pub fn from_config(config: &Config, range: Option<&str>, verbose: bool) -> Result<Self> {
        Ok(Self {
            window: range.unwrap_or(config.cell_range.as_str()).parse()?,
            title_cell: config.title_cell.parse()?,
            verbose,
        })
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            window: CellRange {
                start: CellRef { row: 4, col: 1 },
                end: CellRef { row: 49, col: 12 },
            },
            title_cell: CellRef { row: 0, col: 1 },
            verbose: false,
        }
    }
}

/// 取り込み結果の概要
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub employees: usize,
    /// ワークブックに存在した曜日シート
    pub days: Vec<Weekday>,
    pub title: String,
    pub origin: String,
}

pub async fn run_import<Src, S>(
    source: &Src,
    store: &mut ScheduleStore<S>,
    options: &ImportOptions,
) -> Result<ImportReport>
where
    Src: SheetSource,
    S: Storage,
{
    let bytes = source.fetch().await?;
    if options.verbose {
        println!("  ダウンロード: {} bytes", bytes.len());
    }

    let workbook = grid::decode_workbook(&bytes, &options.window, options.title_cell)?;
    if options.verbose {
        for (day, rows) in &workbook.sheets {
            println!("  シート {}: {}行", day, rows.len());
        }
    }

    let map = build_master_map(&workbook.sheets)?;
    let title = sheet_title(workbook.title_date);
    let origin = source.origin();

    store.save_import(&map, &title, Some(&origin))?;

    Ok(ImportReport {
        employees: map.len(),
        days: workbook.sheets.iter().map(|(day, _)| *day).collect(),
        title,
        origin,
    })
}

/// Googleスプレッドシートのリンクから取り込む
///
/// リンクが空・不正なら取得前にエラーを返し、ストアには書き込まない。
pub async fn import_link<S: Storage>(
    link: &str,
    config: &Config,
    store: &mut ScheduleStore<S>,
    options: &ImportOptions,
) -> Result<ImportReport> {
    let sheet_id = link::validate_link(link)?;
    if options.verbose {
        println!("  シートID: {}", sheet_id);
    }

    let source = GoogleSheetSource::new(&sheet_id, &config.export_url_template, link);
    run_import(&source, store, options).await
}
