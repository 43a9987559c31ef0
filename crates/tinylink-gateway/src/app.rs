use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_url_handler, method_not_allowed_handler, resolve_url_handler, unknown_route_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the router.
    ///
    /// Method mismatches and unknown paths are routed to handlers of their own
    /// so the [`StatusPolicy`](crate::StatusPolicy) picks their status code
    /// instead of axum's 405/404 defaults.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route(
                "/",
                post(create_url_handler).fallback(method_not_allowed_handler),
            )
            .route(
                "/{short_code}",
                get(resolve_url_handler).fallback(method_not_allowed_handler),
            )
            .fallback(unknown_route_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
