//! hitq client prelude
//!
//! The types needed to build and post a hit without the fluent builder.

pub use crate::catalogue::{HitType, Index, ProductAction, format_key, keys, limits};
pub use crate::config::{CollectConfig, Validator};
pub use crate::error::{Error, Result};
pub use crate::executor::{PostOutcome, RequestExecutor};
pub use crate::params::{ParameterAccumulator, as_flag};
pub use crate::transport::{Transport, TransportError, TransportResponse};
pub use crate::validation::{ValidationError, ValidationRule};

pub use ::http::StatusCode;
pub use ::url::Url;
