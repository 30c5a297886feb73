use http::StatusCode;

use super::types::{Error, Kind};
use crate::validation::ValidationError;

impl Error {
    /// Returns true if the call itself was malformed (empty key, bad template).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidArgument(_))
    }

    /// Returns true if a field value was rejected by its validation rule.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.inner.kind, Kind::Validation(_))
    }

    /// Returns true if the endpoint answered with a non-OK status.
    #[must_use]
    pub fn is_post_failed(&self) -> bool {
        matches!(self.inner.kind, Kind::PostFailed(_))
    }

    /// Returns true if the request never produced an HTTP response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self.inner.kind, Kind::Transport)
    }

    /// Returns true if the error came from configuration validation.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self.inner.kind, Kind::Config)
    }

    /// Returns the status code, if the error was generated from a response.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self.inner.kind {
            Kind::PostFailed(code) => Some(code),
            _ => None,
        }
    }

    /// Returns the rejected-field details for validation failures.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationError> {
        match &self.inner.kind {
            Kind::Validation(err) => Some(err),
            _ => None,
        }
    }
}
