//! Hit type, content information and app tracking fields

use hitq_client::catalogue::{HitType, keys, limits};
use hitq_client::error::Result;

use crate::builder::core::QueryBuilder;

impl QueryBuilder {
    /// Hit type (`t`).
    pub fn with_t(&mut self, hit_type: HitType) -> &mut Self {
        self.put(keys::T, hit_type.as_str())
    }

    pub fn with_t_as_page_view(&mut self) -> &mut Self {
        self.with_t(HitType::PageView)
    }

    pub fn with_t_as_screen_view(&mut self) -> &mut Self {
        self.with_t(HitType::ScreenView)
    }

    pub fn with_t_as_event(&mut self) -> &mut Self {
        self.with_t(HitType::Event)
    }

    pub fn with_t_as_transaction(&mut self) -> &mut Self {
        self.with_t(HitType::Transaction)
    }

    pub fn with_t_as_item(&mut self) -> &mut Self {
        self.with_t(HitType::Item)
    }

    pub fn with_t_as_social(&mut self) -> &mut Self {
        self.with_t(HitType::Social)
    }

    pub fn with_t_as_exception(&mut self) -> &mut Self {
        self.with_t(HitType::Exception)
    }

    pub fn with_t_as_timing(&mut self) -> &mut Self {
        self.with_t(HitType::Timing)
    }

    /// Non-interaction hit (`ni`).
    pub fn with_ni(&mut self, non_interaction_hit: bool) -> &mut Self {
        self.put_flag(keys::NI, non_interaction_hit)
    }

    /// Document location URL (`dl`), at most 2048 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_dl(&mut self, document_location_url: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::DL, "documentLocationURL", document_location_url, limits::DL)
    }

    /// Document host name (`dh`), at most 100 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_dh(&mut self, document_host_name: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::DH, "documentHostName", document_host_name, limits::DH)
    }

    /// Document path (`dp`), at most 2048 bytes. Should begin with `/`.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_dp(&mut self, document_path: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::DP, "documentPath", document_path, limits::DP)
    }

    /// Document title (`dt`), at most 1500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_dt(&mut self, document_title: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::DT, "documentTitle", document_title, limits::DT)
    }

    /// Screen name (`cd`), at most 2048 bytes. Required for screenview hits.
    ///
    /// Not to be confused with [`with_cd_x`](Self::with_cd_x), the indexed
    /// custom dimension.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_cd(&mut self, screen_name: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::CD, "screenName", screen_name, limits::CD)
    }

    /// Link id (`linkid`) of a clicked DOM element.
    pub fn with_linkid(&mut self, link_id: impl Into<String>) -> &mut Self {
        self.put(keys::LINKID, link_id)
    }

    /// Application name (`an`), at most 100 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_an(&mut self, application_name: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::AN, "applicationName", application_name, limits::AN)
    }

    /// Application id (`aid`), at most 150 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_aid(&mut self, application_id: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::AID, "applicationID", application_id, limits::AID)
    }

    /// Application version (`av`), at most 100 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_av(&mut self, application_version: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::AV, "applicationVersion", application_version, limits::AV)
    }

    /// Application installer id (`aiid`), at most 150 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_aiid(&mut self, application_installer_id: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(
            keys::AIID,
            "applicationInstallerID",
            application_installer_id,
            limits::AIID,
        )
    }
}
