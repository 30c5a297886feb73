//! Field-level validation failures

/// A single field value rejected by its protocol constraint.
///
/// Every variant names the offending field and the bound it violated so the
/// caller can fix exactly one input and retry the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "the variable/parameter with name {field} has a value {value} where the number of bytes \
         ({actual_bytes}) exceeds the maximum number of bytes allowed ({limit})"
    )]
    MaxLengthExceeded {
        field: String,
        value: String,
        limit: usize,
        actual_bytes: usize,
    },

    #[error("the variable/parameter with name {field} has a value {value} that is less than zero")]
    NegativeValue { field: String, value: String },

    #[error("the actual value ({actual}) for {field} must be between {lo} and {hi}")]
    OutOfBounds {
        field: String,
        lo: i64,
        hi: i64,
        actual: i64,
    },

    #[error("the queue time cannot be negative (queue time millis: {value})")]
    InvalidQueueTime { value: i64 },

    #[error("the variable/parameter with name {field} has a value {value} that is not a number")]
    NotNumeric { field: String, value: String },
}

impl ValidationError {
    /// Name of the field the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MaxLengthExceeded { field, .. }
            | Self::NegativeValue { field, .. }
            | Self::OutOfBounds { field, .. }
            | Self::NotNumeric { field, .. } => field,
            Self::InvalidQueueTime { .. } => "queueTimeMillis",
        }
    }
}
