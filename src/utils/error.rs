use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Price store {path} is corrupt: {message}")]
    StoreCorrupt { path: String, message: String },

    #[error("Notification failed with status {status}: {body}")]
    Notification { status: u16, body: String },
}

/// Per-product failure while fetching or reading a page.
///
/// The display strings end up verbatim in the failure alert, so they are
/// written for the person receiving the LINE message.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("通信エラー: {0}")]
    Request(String),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("{field}取得失敗 ({selector})")]
    NotFound { field: &'static str, selector: String },

    #[error("在庫切れ")]
    OutOfStock,

    #[error("価格を数値に変換できません: {text}")]
    InvalidPrice { text: String },
}

impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        ExtractError::Request(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
