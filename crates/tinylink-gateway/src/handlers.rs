mod fallback;
mod url;

pub use fallback::{method_not_allowed_handler, unknown_route_handler};
pub use url::{create_url_handler, resolve_url_handler};
