//! User timing and page timing fields

use hitq_client::catalogue::{keys, limits};
use hitq_client::error::Result;

use crate::builder::core::QueryBuilder;

impl QueryBuilder {
    /// User timing category (`utc`), at most 150 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_utc(&mut self, user_timing_category: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::UTC, "userTimingCategory", user_timing_category, limits::UTC)
    }

    /// User timing variable name (`utv`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_utv(&mut self, user_timing_variable_name: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(
            keys::UTV,
            "userTimingVariableName",
            user_timing_variable_name,
            limits::UTV,
        )
    }

    /// User timing time (`utt`) in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative duration.
    pub fn with_utt(&mut self, user_timing_time: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::UTT, "userTimingTime", user_timing_time)
    }

    /// User timing label (`utl`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_utl(&mut self, user_timing_label: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::UTL, "userTimingLabel", user_timing_label, limits::UTL)
    }

    // Page timings below are milliseconds and reject negative values.

    /// Page load time (`plt`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative duration.
    pub fn with_plt(&mut self, page_load_time: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::PLT, "pageLoadTime", page_load_time)
    }

    /// DNS lookup time (`dns`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative duration.
    pub fn with_dns(&mut self, dns_time: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::DNS, "dnsTime", dns_time)
    }

    /// Page download time (`pdt`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative duration.
    pub fn with_pdt(&mut self, page_download_time: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::PDT, "pageDownloadTime", page_download_time)
    }

    /// Redirect response time (`rrt`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative duration.
    pub fn with_rrt(&mut self, redirect_response_time: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::RRT, "redirectResponseTime", redirect_response_time)
    }

    /// TCP connect time (`tcp`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative duration.
    pub fn with_tcp(&mut self, tcp_connect_time: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::TCP, "tcpConnectTime", tcp_connect_time)
    }

    /// Server response time (`srt`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative duration.
    pub fn with_srt(&mut self, server_response_time: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::SRT, "serverResponseTime", server_response_time)
    }

    /// DOM interactive time (`dit`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative duration.
    pub fn with_dit(&mut self, dom_interactive_time: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::DIT, "domInteractiveTime", dom_interactive_time)
    }

    /// Content load time (`clt`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative duration.
    pub fn with_clt(&mut self, content_load_time: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::CLT, "contentLoadTime", content_load_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Setter = fn(&mut QueryBuilder, i64) -> Result<&mut QueryBuilder>;

    #[test]
    fn timings_reject_negative_and_accept_zero() {
        let setters: [(&str, Setter); 9] = [
            (keys::UTT, QueryBuilder::with_utt),
            (keys::PLT, QueryBuilder::with_plt),
            (keys::DNS, QueryBuilder::with_dns),
            (keys::PDT, QueryBuilder::with_pdt),
            (keys::RRT, QueryBuilder::with_rrt),
            (keys::TCP, QueryBuilder::with_tcp),
            (keys::SRT, QueryBuilder::with_srt),
            (keys::DIT, QueryBuilder::with_dit),
            (keys::CLT, QueryBuilder::with_clt),
        ];

        let mut qb = QueryBuilder::with_endpoint("http://host/collect").unwrap();
        for (key, setter) in setters {
            assert!(setter(&mut qb, -1).unwrap_err().is_validation(), "{key}");
            assert_eq!(qb.get(key), None);
            setter(&mut qb, 0).unwrap();
            assert_eq!(qb.get(key), Some("0"));
        }
    }
}
