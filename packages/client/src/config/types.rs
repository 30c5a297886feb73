//! Collect client configuration structure

use std::time::Duration;

use url::Url;

/// Settings supplied to the executor and to fresh accumulators.
///
/// The endpoint and the on/off switch are the only settings most callers
/// touch. Timeouts bound the single POST made per hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectConfig {
    /// Collection endpoint every hit is posted to
    pub endpoint: Url,

    /// When false, hits are built but never sent
    pub enabled: bool,

    /// Upper bound for the whole request, connect included
    pub timeout: Duration,

    /// Upper bound for establishing the TCP/TLS connection
    pub connect_timeout: Duration,

    /// User-Agent header sent with every POST
    pub user_agent: String,

    /// Debug logging of parameter writes and posts
    pub debug: bool,
}

impl CollectConfig {
    /// Override the collection endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Turn sending on or off.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
