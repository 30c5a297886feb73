//! hitq public API
//!
//! Fluent, validated builder for measurement protocol hits. Each setter
//! checks its field against the protocol constraint (byte ceilings, sign,
//! index range) before storing it, and `do_post` sends the finished hit to
//! the collect endpoint.
//!
//! ```no_run
//! use hitq::QueryBuilder;
//!
//! QueryBuilder::new()
//!     .with_v1()
//!     .with_tid("UA-XXXX-Y")
//!     .with_cid_as_random_uuid()
//!     .with_t_as_event()
//!     .with_ec("video")?
//!     .with_ea("play")?
//!     .with_ev(300)?
//!     .do_post()?;
//! # Ok::<(), hitq::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;

pub use builder::QueryBuilder;

// Re-export important types from client package
pub use hitq_client::catalogue::{HitType, ProductAction};
pub use hitq_client::startup::log_welcome;
pub use hitq_client::{
    CollectConfig, Error, Kind, PostOutcome, RequestExecutor, Result, Transport, TransportError,
    TransportResponse, ValidationError,
};
pub use rust_decimal::Decimal;

/// Start a hit for the default collect endpoint.
///
/// Shorthand for `QueryBuilder::new()`
#[must_use]
pub fn hit() -> QueryBuilder {
    QueryBuilder::new()
}

/// Start a hit from configuration read from the environment.
///
/// # Errors
///
/// Returns a configuration error when an override is present but invalid.
pub fn from_env() -> Result<QueryBuilder> {
    let config = CollectConfig::from_env()?;
    Ok(QueryBuilder::from_config(&config))
}
