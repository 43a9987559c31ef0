use async_trait::async_trait;
use dashmap::DashMap;
use tinylink_core::repository::{Repository, Result};
use tinylink_core::{ShortCode, StorageError};
use tracing::{debug, trace};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking.
///
/// Entries live as long as the repository. There is no expiry, eviction or
/// capacity bound.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, String>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, original_url: String) -> Result<()> {
        if let Some(previous) = self.storage.insert(code.as_str().to_owned(), original_url) {
            debug!(code = %code, previous = %previous, "overwrote existing mapping");
        } else {
            trace!(code = %code, "stored new mapping");
        }
        Ok(())
    }

    async fn get(&self, code: &ShortCode) -> Result<String> {
        let Some(entry) = self.storage.get(code.as_str()) else {
            return Err(StorageError::NotFound { code: code.clone() });
        };

        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinylink_core::NOT_FOUND_MESSAGE;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("6ba7b811"), "https://example.org/".to_string())
            .await
            .unwrap();

        let result = repo.get(&code("6ba7b811")).await.unwrap();
        assert_eq!(result, "https://example.org/");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let err = repo.get(&code("nope")).await.unwrap_err();
        assert_eq!(err, StorageError::NotFound { code: code("nope") });
        assert_eq!(err.to_string(), NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn insert_overwrites_last_write_wins() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), "https://old.com".to_string())
            .await
            .unwrap();
        repo.insert(&code("abc123"), "https://new.com".to_string())
            .await
            .unwrap();

        assert_eq!(repo.get(&code("abc123")).await.unwrap(), "https://new.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn stored_url_is_returned_verbatim() {
        let repo = InMemoryRepository::new();
        let url = "HTTPS://Example.org/a b?q=%20&x=ё#frag ".to_string();

        repo.insert(&code("raw"), url.clone()).await.unwrap();

        assert_eq!(repo.get(&code("raw")).await.unwrap(), url);
    }

    #[tokio::test]
    async fn lookups_are_case_sensitive() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("AbC"), "https://example.com".to_string())
            .await
            .unwrap();

        assert!(repo.get(&code("abc")).await.is_err());
    }

    #[tokio::test]
    async fn len_and_is_empty() {
        let repo = InMemoryRepository::with_capacity(4);
        assert!(repo.is_empty());

        repo.insert(&code("a"), "https://a.com".to_string())
            .await
            .unwrap();
        repo.insert(&code("b"), "https://b.com".to_string())
            .await
            .unwrap();

        assert!(!repo.is_empty());
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code{:03}", i));
                repo.insert(&c, format!("https://example{}.com", i))
                    .await
                    .unwrap();
            });
            handles.push(handle);
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code{:03}", i));
                let _ = repo.get(&c).await;
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let c = ShortCode::new_unchecked(format!("code{:03}", i));
            let result = repo.get(&c).await.unwrap();
            assert_eq!(result, format!("https://example{}.com", i));
        }
    }

    #[tokio::test]
    async fn concurrent_writes_to_same_code_keep_one_value() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..32u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(&code("shared"), format!("https://example{}.com", i))
                    .await
                    .unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let stored = repo.get(&code("shared")).await.unwrap();
        assert!(stored.starts_with("https://example"));
        assert_eq!(repo.len(), 1);
    }
}
