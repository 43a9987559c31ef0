//! Core types and traits for the tinylink URL shortener.
//!
//! This crate provides the identifier type and the storage and shortening
//! capabilities shared by the storage backend, the shortening service and the
//! HTTP gateway.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError, StorageError, NOT_FOUND_MESSAGE};
pub use repository::Repository;
pub use shortcode::ShortCode;
pub use shortener::Shortener;
