use crate::error::AppError;
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

const TEXT_PLAIN: &str = "text/plain";

/// Maps request failures to status codes and decides where the error text
/// goes.
///
/// | failure                 | `Legacy`               | `Standard` |
/// |-------------------------|------------------------|------------|
/// | unregistered path       | 400                    | 404        |
/// | method mismatch         | 400                    | 405        |
/// | malformed request       | 400                    | 400        |
/// | unknown short code      | 400, `Location` header | 404        |
/// | storage failure         | 400                    | 500        |
///
/// Routing failures are reported with the status reason phrase as body, every
/// other failure with its own message.
///
/// The policy also decides which `Content-Type` values a create request may
/// carry, see [`StatusPolicy::accepts_content_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Everything is a 400; an unknown short code puts the message in the
    /// `Location` header and leaves the body empty. `Content-Type` must be
    /// exactly `text/plain`.
    #[default]
    Legacy,
    /// Conventional status codes, messages always in the body. Any
    /// `text/plain` media type is accepted, with or without parameters.
    Standard,
}

/// Where the error text of a failed request is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPlacement {
    Body,
    LocationHeader,
}

impl StatusPolicy {
    /// Whether a create request with this `Content-Type` is accepted.
    pub fn accepts_content_type(self, content_type: Option<&HeaderValue>) -> bool {
        let Some(value) = content_type.and_then(|value| value.to_str().ok()) else {
            return false;
        };

        match self {
            StatusPolicy::Legacy => value == TEXT_PLAIN,
            StatusPolicy::Standard => value
                .split(';')
                .next()
                .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(TEXT_PLAIN)),
        }
    }

    pub fn status(self, error: &AppError) -> StatusCode {
        match (self, error) {
            (StatusPolicy::Legacy, _) => StatusCode::BAD_REQUEST,
            (StatusPolicy::Standard, AppError::UnknownRoute | AppError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            (StatusPolicy::Standard, AppError::MethodNotAllowed) => StatusCode::METHOD_NOT_ALLOWED,
            (StatusPolicy::Standard, AppError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            (
                StatusPolicy::Standard,
                AppError::UnsupportedContentType
                | AppError::UnreadableBody(_)
                | AppError::BadRequest(_),
            ) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn placement(self, error: &AppError) -> ErrorPlacement {
        match (self, error) {
            (StatusPolicy::Legacy, AppError::NotFound) => ErrorPlacement::LocationHeader,
            _ => ErrorPlacement::Body,
        }
    }

    /// Text reported for `error` under this policy.
    pub fn message(self, error: &AppError) -> String {
        match error {
            AppError::UnknownRoute | AppError::MethodNotAllowed => self
                .status(error)
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
            other => other.to_string(),
        }
    }

    /// Builds the response for a failed request.
    pub fn respond(self, error: AppError) -> Response {
        let status = self.status(&error);
        let message = self.message(&error);

        if let AppError::Internal(_) = error {
            warn!(status = status.as_u16(), error = %error, "request failed");
        } else {
            debug!(status = status.as_u16(), error = %error, "request rejected");
        }

        match self.placement(&error) {
            ErrorPlacement::Body => (status, message).into_response(),
            ErrorPlacement::LocationHeader => match HeaderValue::from_str(&message) {
                Ok(location) => (status, [(LOCATION, location)]).into_response(),
                Err(_) => (status, message).into_response(),
            },
        }
    }
}
