use axum::extract::State;
use axum::response::Response;

use crate::error::AppError;
use crate::state::AppState;

/// Answers requests for a registered path with an unregistered method.
pub async fn method_not_allowed_handler(State(state): State<AppState>) -> Response {
    state.policy().respond(AppError::MethodNotAllowed)
}

/// Answers requests for a path that no route matches.
pub async fn unknown_route_handler(State(state): State<AppState>) -> Response {
    state.policy().respond(AppError::UnknownRoute)
}
