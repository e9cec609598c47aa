use clap::{Parser, Subcommand};
use shift_board_common::Weekday;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shift-board")]
#[command(about = "週間シフト表（Googleスプレッドシート）取り込み・閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 保存先ファイル（省略時は環境変数・設定値）
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// スプレッドシートを取り込んで保存
    Import {
        /// GoogleスプレッドシートのURL
        link: Option<String>,

        /// ローカルのxlsxファイルから取り込む
        #[arg(long, conflicts_with = "link")]
        file: Option<PathBuf>,

        /// 読み取るセル範囲（例: B5:M50）
        #[arg(short, long)]
        range: Option<String>,
    },

    /// 社員・曜日を指定して表示
    Show {
        /// 社員名（省略時は記憶中の社員）
        #[arg(short, long)]
        employee: Option<String>,

        /// 曜日 (Пн/Вт/Ср/Чт/Пт, mon..fri, 1..5)。省略時は今日
        #[arg(short, long)]
        day: Option<Weekday>,

        /// 全社員・全曜日を表示
        #[arg(long)]
        all: bool,
    },

    /// 社員一覧
    Employees,

    /// 社員を選択して記憶（名前省略時は対話選択）
    Select {
        /// 社員名
        employee: Option<String>,

        /// 選択を解除
        #[arg(long, conflicts_with = "employee")]
        clear: bool,
    },

    /// 取り込み元リンク・記憶中の社員を削除（指定なしは両方）
    Forget {
        /// 取り込み元リンクを削除
        #[arg(long)]
        link: bool,

        /// 記憶中の社員を削除
        #[arg(long)]
        employee: bool,
    },

    /// 保存状態を表示
    Status,

    /// 雪の飾りの状態を表示/切り替え
    Snow {
        /// オン/オフを切り替える
        #[arg(long)]
        toggle: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のセル範囲を設定
        #[arg(long)]
        set_range: Option<String>,

        /// ダウンロードURLのテンプレートを設定（`{id}` を含む）
        #[arg(long)]
        set_url_template: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_with_day() {
        let cli = Cli::parse_from(["shift-board", "show", "--employee", "Alice", "--day", "Ср"]);
        match cli.command {
            Commands::Show { employee, day, all } => {
                assert_eq!(employee.as_deref(), Some("Alice"));
                assert_eq!(day, Some(Weekday::Wed));
                assert!(!all);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_import_file_conflicts_with_link() {
        let result = Cli::try_parse_from([
            "shift-board",
            "import",
            "https://docs.google.com/spreadsheets/d/abc/edit",
            "--file",
            "week.xlsx",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_storage_flag() {
        let cli = Cli::parse_from(["shift-board", "status", "--storage", "/tmp/s.json", "-v"]);
        assert_eq!(cli.storage, Some(PathBuf::from("/tmp/s.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_day_rejected() {
        assert!(Cli::try_parse_from(["shift-board", "show", "--day", "Сб"]).is_err());
    }
}
