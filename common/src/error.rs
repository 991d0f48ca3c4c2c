//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Could not read the file: {0}")]
    Decode(String),

    #[error("Could not find valid data. Please check the CSV file format.")]
    NoValidData,

    #[error("Please enter the clerk's name before generating letters.")]
    MissingClerk,

    #[error("No valid room numbers were entered. Please enter at least one valid room number from the list.")]
    NoMatchedRooms,

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// 利用者が操作をやり直せば回復できるエラーか
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Decode(_) | Error::NoValidData | Error::MissingClerk | Error::NoMatchedRooms
        )
    }
}
