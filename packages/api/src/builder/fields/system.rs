//! System info fields

use hitq_client::catalogue::{keys, limits};
use hitq_client::error::Result;

use crate::builder::core::QueryBuilder;

// Every text field in this section is capped at 20 bytes.
impl QueryBuilder {
    /// Screen resolution (`sr`), e.g. `800x600`.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_sr(&mut self, screen_resolution: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::SR, "screenResolution", screen_resolution, limits::SR)
    }

    /// Viewport size (`vp`), e.g. `123x456`.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_vp(&mut self, viewport_size: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::VP, "viewportSize", viewport_size, limits::VP)
    }

    /// Document encoding (`de`), e.g. `UTF-8`.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_de(&mut self, document_encoding: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::DE, "documentEncoding", document_encoding, limits::DE)
    }

    /// Screen colors (`sd`), e.g. `24-bits`.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_sd(&mut self, screen_colors: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::SD, "screenColors", screen_colors, limits::SD)
    }

    /// User language (`ul`), e.g. `en-us`.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_ul(&mut self, user_language: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::UL, "userLanguage", user_language, limits::UL)
    }

    /// Java enabled (`je`).
    pub fn with_je(&mut self, java_enabled: bool) -> &mut Self {
        self.put_flag(keys::JE, java_enabled)
    }

    /// Flash version (`fl`), e.g. `10 1 r103`.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_fl(&mut self, flash_version: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::FL, "flashVersion", flash_version, limits::FL)
    }
}
