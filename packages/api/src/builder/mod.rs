//! Hit builder modules
//!
//! `core` holds the builder and its helpers, `fields` the protocol field
//! setters and `methods` the terminal operations.

pub mod core;
pub mod fields;
pub mod methods;

pub use core::QueryBuilder;
