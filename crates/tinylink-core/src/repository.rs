use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage capability mapping short codes to original URLs.
///
/// Implementations must be safe to share between request tasks: concurrent
/// inserts and lookups are serialized by the backend, never by the caller.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Stores `original_url` under `code`, replacing any previous value.
    ///
    /// Last write wins. An `Err` only reports a backend failure.
    async fn insert(&self, code: &ShortCode, original_url: String) -> Result<()>;

    /// Retrieves the URL stored under `code`.
    ///
    /// Returns `Err(StorageError::NotFound)` if the code was never inserted.
    async fn get(&self, code: &ShortCode) -> Result<String>;
}
