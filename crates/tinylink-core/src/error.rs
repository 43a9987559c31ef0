use crate::shortcode::ShortCode;
use thiserror::Error;

/// User-facing message reported when a short code has no stored URL.
pub const NOT_FOUND_MESSAGE: &str = "URL with such id doesn't exist";

/// Errors related to the core functionality of the URL shortener service.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors returned by [`Repository`](crate::Repository) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The code has never been inserted. The code itself is the only data
    /// carried with the failure.
    #[error("URL with such id doesn't exist")]
    NotFound { code: ShortCode },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("URL with such id doesn't exist")]
    NotFound { code: ShortCode },
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortCode(message) => Self::InvalidShortCode(message),
        }
    }
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::NotFound { code } => Self::NotFound { code },
            other => Self::Storage(other.to_string()),
        }
    }
}
