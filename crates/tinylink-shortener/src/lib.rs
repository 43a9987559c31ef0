//! URL shortener service implementation.
//!
//! This crate wires a [`Repository`](tinylink_core::Repository) and a
//! [`Generator`](tinylink_generator::Generator) into the
//! [`Shortener`](tinylink_core::Shortener) capability used by the gateway.

pub mod service;

pub use service::ShortenerService;
pub use tinylink_core::{Shortener, ShortenerError};
