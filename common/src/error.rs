//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    /// 取り込み結果に社員が一人もいない
    #[error("Не удалось создать объект из данных.")]
    EmptyResult,

    /// 保存済みマップのデシリアライズ失敗
    #[error("Ошибка при загрузке данных из хранилища.")]
    StoredDataCorrupt(#[source] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
