use std::sync::Arc;

use tinylink_core::{ShortCode, Shortener};
use typed_builder::TypedBuilder;

use crate::policy::StatusPolicy;

#[derive(Clone, TypedBuilder)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    /// Prefix for returned short URLs. When unset the request host is used.
    #[builder(default, setter(into))]
    public_base_url: Option<String>,
    #[builder(default)]
    policy: StatusPolicy,
}

impl AppState {
    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn policy(&self) -> StatusPolicy {
        self.policy
    }

    /// Renders the short URL handed back to the client.
    pub fn short_url(&self, request_host: &str, code: &ShortCode) -> String {
        match &self.public_base_url {
            Some(base_url) => code.to_url(base_url),
            None => format!("{}/{}", request_host, code),
        }
    }
}
