//! HTTP front end for the tinylink shortener.
//!
//! `POST /` with a `text/plain` body creates a short URL, `GET /{short_code}`
//! redirects to the stored URL. Failures are turned into responses by the
//! configured [`StatusPolicy`].

pub mod app;
pub mod error;
pub mod handlers;
pub mod policy;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use policy::StatusPolicy;
pub use state::AppState;
