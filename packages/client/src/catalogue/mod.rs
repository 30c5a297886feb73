//! Measurement protocol field catalogue
//!
//! Keys, templated key patterns, byte ceilings and enumerated values. The
//! catalogue is immutable and shared read-only by every accumulator.

pub mod hit_type;
pub mod keys;
pub mod limits;
pub mod template;

pub use hit_type::{HitType, PROTOCOL_VERSION, ProductAction};
pub use template::{Index, MAX_INDICES, PLACEHOLDER, format_key, index_values};
