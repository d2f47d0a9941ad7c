//! Where the backend lives and how long to wait for it

use shared::SessionRead;
use std::sync::Arc;

/// Connection settings for the storefront backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend API base URL (e.g., "http://localhost:8081/api")
    pub base_url: String,

    /// Per-request timeout, seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Config pointing at `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a client from this configuration, reading tokens from the
    /// given session context.
    pub fn build_client(&self, session: Arc<dyn SessionRead>) -> super::ShopClient {
        super::ShopClient::new(self, session)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8081/api")
    }
}
