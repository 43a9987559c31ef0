pub mod memory;

pub use memory::InMemoryRepository;
pub use tinylink_core::repository::{Repository, Result};
pub use tinylink_core::StorageError;
