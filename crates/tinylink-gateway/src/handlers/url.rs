use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_TYPE, HOST, LOCATION};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tinylink_core::ShortCode;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::state::AppState;

pub async fn create_url_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    create_url(&state, &uri, &headers, body)
        .await
        .unwrap_or_else(|error| state.policy().respond(error))
}

pub async fn resolve_url_handler(
    State(state): State<AppState>,
    short_code: std::result::Result<Path<String>, PathRejection>,
) -> Response {
    resolve_url(&state, short_code)
        .await
        .unwrap_or_else(|error| state.policy().respond(error))
}

async fn create_url(
    state: &AppState,
    uri: &Uri,
    headers: &HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Response> {
    if !state.policy().accepts_content_type(headers.get(CONTENT_TYPE)) {
        return Err(AppError::UnsupportedContentType);
    }

    let body = body.map_err(|rejection| AppError::UnreadableBody(rejection.body_text()))?;
    let original_url = String::from_utf8(body.to_vec())
        .map_err(|e| AppError::UnreadableBody(format!("request body is not valid UTF-8: {e}")))?;

    // Whatever is stored must be usable as a Location header later.
    if HeaderValue::from_bytes(original_url.as_bytes()).is_err() {
        return Err(AppError::BadRequest(
            "URL contains characters that are not allowed in a Location header".to_string(),
        ));
    }

    let code = state.shortener().shorten(original_url).await?;
    let short_url = state.short_url(request_host(uri, headers), &code);

    info!(code = %code, short_url = %short_url, "created short url");
    Ok((StatusCode::CREATED, short_url).into_response())
}

async fn resolve_url(
    state: &AppState,
    short_code: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let Path(raw) = short_code.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    // Codes outside the alphabet are never stored.
    let code = ShortCode::new(raw).map_err(|_| AppError::NotFound)?;

    let original_url = state.shortener().resolve(&code).await?;
    // Only reachable for URLs written to the repository without going
    // through `create_url`.
    let location = HeaderValue::from_bytes(original_url.as_bytes()).map_err(|_| {
        AppError::Internal(format!(
            "stored URL for '{}' cannot be sent in a Location header",
            code
        ))
    })?;

    debug!(code = %code, url = %original_url, "redirecting");
    Ok((StatusCode::TEMPORARY_REDIRECT, [(LOCATION, location)]).into_response())
}

fn request_host<'a>(uri: &'a Uri, headers: &'a HeaderMap) -> &'a str {
    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .unwrap_or_default()
}
