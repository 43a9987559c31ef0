use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Derives a short code for `original_url`, records the mapping and
    /// returns the code.
    async fn shorten(&self, original_url: String) -> Result<ShortCode>;

    /// Resolves a short code to the original URL.
    async fn resolve(&self, code: &ShortCode) -> Result<String>;
}
