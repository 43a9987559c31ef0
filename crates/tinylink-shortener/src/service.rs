use async_trait::async_trait;
use std::sync::Arc;
use tinylink_core::{Repository, ShortCode, Shortener, ShortenerError};
use tinylink_generator::Generator;
use tracing::{debug, trace, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator`. Generated codes are
/// written unconditionally: when a generator repeats a code, the newer URL
/// replaces the older one. No collision retry is performed.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self::from_shared(Arc::new(repository), Arc::new(generator))
    }

    /// Creates a service over a repository that is also used elsewhere.
    pub fn from_shared(repository: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: String) -> Result<ShortCode, ShortenerError> {
        if original_url.is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        let code = self.generator.generate(&original_url)?;

        self.repository
            .insert(&code, original_url)
            .await
            .inspect_err(|e| warn!(code = %code, error = %e, "failed to store mapping"))?;

        debug!(code = %code, "shortened url");
        Ok(code)
    }

    async fn resolve(&self, code: &ShortCode) -> Result<String, ShortenerError> {
        trace!(code = %code, "resolving short code");
        Ok(self.repository.get(code).await?)
    }
}
