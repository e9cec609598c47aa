use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftBoardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("Пожалуйста, введите ссылку")]
    EmptyLink,

    #[error("Неверная ссылка на Google Таблицу.")]
    InvalidLink(String),

    #[error("Ошибка загрузки таблицы: {0}")]
    Network(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Excel解析エラー: {0}")]
    Parse(#[from] calamine::Error),

    #[error("セル範囲が不正: {0}")]
    InvalidRange(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("Сотрудник не найден: {0}")]
    UnknownEmployee(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Interactive(String),

    #[error(transparent)]
    Common(#[from] shift_board_common::Error),
}

pub type Result<T> = std::result::Result<T, ShiftBoardError>;
