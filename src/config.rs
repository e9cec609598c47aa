use crate::error::{Result, ShiftBoardError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 保存先を上書きする環境変数
pub const STORAGE_ENV: &str = "SHIFT_BOARD_STORAGE";

pub const DEFAULT_EXPORT_URL_TEMPLATE: &str =
    "https://docs.google.com/spreadsheets/d/{id}/export?format=xlsx";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `{id}` をシートIDに置き換えてダウンロードする
    pub export_url_template: String,
    /// 各曜日シートから読むセル範囲
    pub cell_range: String,
    /// タイトル用の日付セル（月曜シート）
    pub title_cell: String,
    pub storage_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ShiftBoardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("shift-board").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            export_url_template: DEFAULT_EXPORT_URL_TEMPLATE.into(),
            cell_range: "B5:M50".into(),
            title_cell: "B1".into(),
            storage_path: None,
        }
    }

    /// 保存先ファイル
    ///
    /// 優先順位: 引数 → 環境変数 → 設定ファイル → データディレクトリ
    pub fn storage_path(&self, overridden: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = overridden {
            return Ok(path);
        }
        if let Ok(path) = std::env::var(STORAGE_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        if let Some(path) = &self.storage_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| ShiftBoardError::Config("データディレクトリが見つかりません".into()))?;
        Ok(data_dir.join("shift-board").join("storage.json"))
    }
}
