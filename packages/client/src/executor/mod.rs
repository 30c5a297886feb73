//! Request execution against the collect endpoint
//!
//! One built URL in, one POST out. The executor owns the configuration and a
//! shared transport so several builders can post through the same client.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use url::Url;

use crate::config::{CollectConfig, Validator};
use crate::error::{self, Result};
use crate::transport::{HyperTransport, Transport};

/// What happened to a hit handed to [`RequestExecutor::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// The endpoint answered 200 OK.
    Delivered { status: StatusCode, body: Bytes },
    /// Tracking is switched off; nothing was sent.
    Disabled,
}

impl PostOutcome {
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, PostOutcome::Delivered { .. })
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        matches!(self, PostOutcome::Disabled)
    }

    /// Response status, if a request was made
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PostOutcome::Delivered { status, .. } => Some(*status),
            PostOutcome::Disabled => None,
        }
    }

    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            PostOutcome::Delivered { body, .. } => Some(body),
            PostOutcome::Disabled => None,
        }
    }
}

/// Posts built hit URLs and classifies the response.
///
/// Cloning is cheap: clones share the transport.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    config: CollectConfig,
}

impl fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("transport", &self.transport)
            .field("endpoint", &self.config.endpoint.as_str())
            .field("enabled", &self.config.enabled)
            .finish()
    }
}

impl Default for RequestExecutor {
    fn default() -> Self {
        Self::new(CollectConfig::default())
    }
}

impl RequestExecutor {
    /// Executor using the default HTTP/1.1 transport.
    #[must_use]
    pub fn new(config: CollectConfig) -> Self {
        let transport = HyperTransport::new(&config);
        Self::with_transport(config, transport)
    }

    /// Executor posting through a caller-supplied transport.
    ///
    /// # Arguments
    /// * `config` - Endpoint, on/off switch and timeouts
    /// * `transport` - Performs the POST
    #[must_use]
    pub fn with_transport(config: CollectConfig, transport: impl Transport + 'static) -> Self {
        Self::from_shared(config, Arc::new(transport))
    }

    #[must_use]
    pub fn from_shared(config: CollectConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, config }
    }

    #[must_use]
    pub fn config(&self) -> &CollectConfig {
        &self.config
    }

    /// POST `url` with an empty body, once.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the settings fail validation
    /// (nothing is sent), a post-failed error carrying `url` and the status
    /// when the endpoint answers anything but 200, and a transport error when
    /// no response was obtained.
    pub fn execute(&self, url: &Url) -> Result<PostOutcome> {
        if !self.config.enabled {
            tracing::debug!("Tracking disabled, not posting {}", url);
            return Ok(PostOutcome::Disabled);
        }

        self.config.validate()?;

        tracing::debug!("POST {}", url);
        let response = self
            .transport
            .post(url)
            .map_err(|e| error::transport(e).with_url(url.clone()))?;

        if response.status != StatusCode::OK {
            tracing::warn!("Collect endpoint answered {} for {}", response.status, url);
            return Err(error::post_failed(url.clone(), response.status));
        }

        if self.config.debug {
            tracing::debug!("Delivered hit, {} byte response", response.body.len());
        }
        Ok(PostOutcome::Delivered {
            status: response.status,
            body: response.body,
        })
    }
}
