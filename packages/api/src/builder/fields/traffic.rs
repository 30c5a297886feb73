//! Traffic source fields

use hitq_client::catalogue::{keys, limits};
use hitq_client::error::Result;

use crate::builder::core::QueryBuilder;

impl QueryBuilder {
    /// Document referrer (`dr`), at most 2048 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_dr(&mut self, document_referrer: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::DR, "documentReferrer", document_referrer, limits::DR)
    }

    /// Campaign name (`cn`), at most 100 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_cn(&mut self, campaign_name: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::CN, "campaignName", campaign_name, limits::CN)
    }

    /// Campaign source (`cs`), at most 100 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_cs(&mut self, campaign_source: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::CS, "campaignSource", campaign_source, limits::CS)
    }

    /// Campaign medium (`cm`), at most 50 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_cm(&mut self, campaign_medium: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::CM, "campaignMedium", campaign_medium, limits::CM)
    }

    /// Campaign keyword (`ck`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_ck(&mut self, campaign_keyword: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::CK, "campaignKeyword", campaign_keyword, limits::CK)
    }

    /// Campaign content (`cc`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_cc(&mut self, campaign_content: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::CC, "campaignContent", campaign_content, limits::CC)
    }

    /// Campaign id (`ci`), at most 100 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_ci(&mut self, campaign_id: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::CI, "campaignID", campaign_id, limits::CI)
    }

    /// Google Ads id (`gclid`).
    pub fn with_gclid(&mut self, google_ads_id: impl Into<String>) -> &mut Self {
        self.put(keys::GCLID, google_ads_id)
    }

    /// Google Display Ads id (`dclid`).
    pub fn with_dclid(&mut self, google_display_ads_id: impl Into<String>) -> &mut Self {
        self.put(keys::DCLID, google_display_ads_id)
    }
}
