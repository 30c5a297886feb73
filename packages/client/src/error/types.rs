use std::error::Error as StdError;
use std::fmt;

use http::StatusCode;
use url::Url;

use crate::validation::ValidationError;

/// A Result alias where the Err case is `hitq_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while building or posting a hit.
#[derive(Clone)]
pub struct Error {
    pub inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub url: Option<Url>,
}

impl Clone for Inner {
    fn clone(&self) -> Self {
        Inner {
            kind: self.kind.clone(),
            source: None, // Cannot clone trait objects, so we lose the source
            url: self.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Malformed call: empty key, bad template, wrong index count
    InvalidArgument(String),
    /// A field value violated its protocol constraint
    Validation(ValidationError),
    /// The collect endpoint answered with something other than 200 OK
    PostFailed(StatusCode),
    /// Connection, DNS, TLS or timeout failure below HTTP
    Transport,
    /// Invalid client configuration
    Config,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None, url: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.inner.url = Some(url);
        self
    }

    /// The classification of this error.
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.inner.url.as_ref()
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::new(Kind::Validation(err))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("hitq::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", url);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            Kind::Validation(err) => write!(f, "{err}"),
            Kind::PostFailed(status) => match &self.inner.url {
                Some(url) => write!(
                    f,
                    "the post failed for the URI {url} (http status: {})",
                    status.as_u16()
                ),
                None => write!(f, "the post failed (http status: {})", status.as_u16()),
            },
            Kind::Transport => match &self.inner.source {
                Some(source) => write!(f, "transport error: {source}"),
                None => f.write_str("transport error"),
            },
            Kind::Config => match &self.inner.source {
                Some(source) => write!(f, "configuration error: {source}"),
                None => f.write_str("configuration error"),
            },
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.inner.kind {
            Kind::Validation(err) => Some(err),
            _ => self
                .inner
                .source
                .as_ref()
                .map(|err| &**err as &(dyn StdError + 'static)),
        }
    }
}
