//! Field validation
//!
//! Parameterized rules (`ValidationRule`) and the typed checks the field
//! setters use before a value reaches the accumulator. All checks are pure:
//! they never touch parameter state.

pub mod error;
pub mod rules;

pub use error::ValidationError;
pub use rules::{
    INDEX_MAX, INDEX_MIN, ValidationRule, check_between, check_index, check_not_negative,
    check_queue_time, check_size_of,
};
