//! Event, social interaction and exception fields

use hitq_client::catalogue::{keys, limits};
use hitq_client::error::Result;

use crate::builder::core::QueryBuilder;

impl QueryBuilder {
    /// Event category (`ec`), at most 150 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_ec(&mut self, event_category: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::EC, "eventCategory", event_category, limits::EC)
    }

    /// Event action (`ea`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_ea(&mut self, event_action: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::EA, "eventAction", event_action, limits::EA)
    }

    /// Event label (`el`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_el(&mut self, event_label: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::EL, "eventLabel", event_label, limits::EL)
    }

    /// Event value (`ev`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative value.
    pub fn with_ev(&mut self, event_value: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::EV, "eventValue", event_value)
    }

    /// Social network (`sn`), at most 50 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_sn(&mut self, social_network: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::SN, "socialNetwork", social_network, limits::SN)
    }

    /// Social action (`sa`), at most 50 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_sa(&mut self, social_action: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::SA, "socialAction", social_action, limits::SA)
    }

    /// Social action target (`st`), at most 2048 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_st(&mut self, social_action_target: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::ST, "socialActionTarget", social_action_target, limits::ST)
    }

    /// Exception description (`exd`), at most 150 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_exd(&mut self, exception_description: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::EXD, "exceptionDescription", exception_description, limits::EXD)
    }

    /// Exception is fatal (`exf`).
    pub fn with_exf(&mut self, exception_fatal: bool) -> &mut Self {
        self.put_flag(keys::EXF, exception_fatal)
    }
}
