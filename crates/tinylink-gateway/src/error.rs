use thiserror::Error;
use tinylink_core::ShortenerError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every way a request can fail.
///
/// Errors carry no status code; the [`StatusPolicy`](crate::StatusPolicy)
/// decides how each one is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Clients see the status reason phrase instead of this text.
    #[error("no route for this path")]
    UnknownRoute,
    /// Clients see the status reason phrase instead of this text.
    #[error("method not allowed for this path")]
    MethodNotAllowed,
    #[error("Content-Type isn't text/plain")]
    UnsupportedContentType,
    #[error("{0}")]
    UnreadableBody(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("URL with such id doesn't exist")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::NotFound { .. } => Self::NotFound,
            err @ (ShortenerError::InvalidUrl(_) | ShortenerError::InvalidShortCode(_)) => {
                Self::BadRequest(err.to_string())
            }
            err @ ShortenerError::Storage(_) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinylink_core::{ShortCode, NOT_FOUND_MESSAGE};

    #[test]
    fn shortener_errors_map_to_request_errors() {
        let not_found = ShortenerError::NotFound {
            code: ShortCode::new_unchecked("abc"),
        };
        assert_eq!(AppError::from(not_found), AppError::NotFound);

        let invalid = ShortenerError::InvalidUrl("URL cannot be empty".to_string());
        assert_eq!(
            AppError::from(invalid),
            AppError::BadRequest("invalid url: URL cannot be empty".to_string())
        );

        let storage = ShortenerError::Storage("down".to_string());
        assert!(matches!(AppError::from(storage), AppError::Internal(_)));
    }

    #[test]
    fn messages() {
        assert_eq!(AppError::NotFound.to_string(), NOT_FOUND_MESSAGE);
        assert_eq!(
            AppError::UnsupportedContentType.to_string(),
            "Content-Type isn't text/plain"
        );
    }
}
