//! Short code generators.
//!
//! Three strategies are provided:
//! - [`ShuffleGenerator`] derives a code from a random permutation of the
//!   URL's own characters.
//! - [`UuidGenerator`] keeps the leading hex digits of a random v4 UUID.
//! - [`SeqGenerator`] counts upwards behind a fixed prefix.

pub mod seq;
pub mod shuffle;
pub mod uuid_v4;

pub use seq::SeqGenerator;
pub use shuffle::ShuffleGenerator;
pub use uuid_v4::UuidGenerator;

use tinylink_core::{CoreError, ShortCode};

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage, so
/// two calls may return the same code. The repository keeps the last write.
pub trait Generator: Send + Sync + 'static {
    /// Generates a short code for `original_url`.
    ///
    /// Generators that don't look at the URL ignore it.
    fn generate(&self, original_url: &str) -> Result<ShortCode, CoreError>;

    /// Checks the generator's settings once, before it serves requests.
    ///
    /// A generator that passes can still fail for a particular URL, but never
    /// fails for every URL because of how it was configured.
    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&self, original_url: &str) -> Result<ShortCode, CoreError> {
        (**self).generate(original_url)
    }

    fn validate(&self) -> Result<(), CoreError> {
        (**self).validate()
    }
}
