use crate::Generator;
use std::sync::atomic::{AtomicU64, Ordering};
use tinylink_core::shortcode::MAX_LENGTH;
use tinylink_core::{CoreError, ShortCode};

/// Zero-padded width of the counter.
const COUNTER_WIDTH: usize = 6;

/// A short code generator using sequential counters.
///
/// This generator produces sequential codes like "tl000000", "tl000001", etc.
/// It guarantees uniqueness within a single instance.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    /// Creates a new sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a new sequential generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    fn generate(&self, _original_url: &str) -> Result<ShortCode, CoreError> {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new(format!("{}{:06}", self.prefix, count))
    }

    fn validate(&self) -> Result<(), CoreError> {
        if let Some(c) = self.prefix.chars().find(|c| !ShortCode::is_code_char(*c)) {
            return Err(CoreError::InvalidShortCode(format!(
                "prefix '{}' contains '{}', which cannot appear in a short code",
                self.prefix, c
            )));
        }
        if self.prefix.chars().count() + COUNTER_WIDTH > MAX_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "prefix '{}' leaves no room for a {}-digit counter within {} characters",
                self.prefix, COUNTER_WIDTH, MAX_LENGTH
            )));
        }
        Ok(())
    }
}
