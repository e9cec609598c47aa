//! ワークブックの取得元
//!
//! - GoogleSheetSource: エクスポートURLからxlsxをダウンロード
//! - FileSheetSource: ローカルのxlsxファイルを読む

use crate::error::{Result, ShiftBoardError};
use crate::link::SheetId;
use std::path::PathBuf;

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// xlsxバイト列の取得元
#[allow(async_fn_in_trait)]
pub trait SheetSource {
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// 比較リンクとして保存する取り込み元
    fn origin(&self) -> String;
}

pub struct GoogleSheetSource {
    client: reqwest::Client,
    export_url: String,
    link: String,
}

impl GoogleSheetSource {
    /// `url_template` の `{id}` を置き換えてダウンロードURLを作る
    pub fn new(sheet_id: &SheetId, url_template: &str, link: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            export_url: url_template.replace("{id}", sheet_id.as_str()),
            link: link.trim().to_string(),
        }
    }

    pub fn export_url(&self) -> &str {
        &self.export_url
    }
}

impl SheetSource for GoogleSheetSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.export_url)
            .header(reqwest::header::CONTENT_TYPE, XLSX_CONTENT_TYPE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            return Err(ShiftBoardError::Network(reason));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn origin(&self) -> String {
        self.link.clone()
    }
}

pub struct FileSheetSource {
    path: PathBuf,
}

impl FileSheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SheetSource for FileSheetSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        if !self.path.exists() {
            return Err(ShiftBoardError::FileNotFound(self.path.display().to_string()));
        }
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}
