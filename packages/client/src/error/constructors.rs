use http::StatusCode;
use url::Url;

use super::types::{Error, Kind};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for a malformed call.
pub fn invalid_argument(reason: impl Into<String>) -> Error {
    Error::new(Kind::InvalidArgument(reason.into()))
}

/// Creates an `Error` for a non-OK response from the collect endpoint.
pub fn post_failed(url: Url, status: StatusCode) -> Error {
    Error::new(Kind::PostFailed(status)).with_url(url)
}

/// Creates an `Error` for a transport failure.
pub fn transport<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Transport).with(e.into())
}

/// Creates an `Error` for an invalid configuration.
pub fn configuration<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Config).with(e.into())
}
