//! # hitq client core
//!
//! Building blocks for measurement protocol hits: an ordered, validated
//! parameter accumulator, the protocol key catalogue, validation rules and a
//! blocking executor that posts the finished URL to the collect endpoint.
//!
//! Most applications use the fluent `QueryBuilder` from the `hitq` crate;
//! this crate is what it is built on.
//!
//! ## Usage
//!
//! ```
//! use hitq_client::catalogue::{keys, limits};
//! use hitq_client::params::ParameterAccumulator;
//! use hitq_client::validation::ValidationRule;
//!
//! let mut acc = ParameterAccumulator::parse("http://host/collect").unwrap();
//! acc.put(keys::V, "1").put(keys::TID, "UA-1-1");
//! acc.set_validated_parameter(
//!     keys::DP,
//!     "documentPath",
//!     "/home",
//!     &[ValidationRule::MaxByteLength(limits::DP)],
//! )
//! .unwrap();
//! assert_eq!(acc.escaped_uri(), "http://host/collect?v=1&tid=UA-1-1&dp=%2Fhome");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod catalogue;
pub mod config;
pub mod error;
pub mod executor;
pub mod params;
pub mod prelude;
pub mod startup;
pub mod transport;
pub mod validation;

pub use config::CollectConfig;
pub use error::{Error, Kind, Result};
pub use executor::{PostOutcome, RequestExecutor};
pub use params::{ParameterAccumulator, ParameterSet};
pub use transport::{HyperTransport, Transport, TransportError, TransportResponse};
pub use validation::{ValidationError, ValidationRule};
