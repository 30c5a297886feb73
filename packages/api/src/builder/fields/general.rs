//! General, user and session fields

use std::time::Duration;

use hitq_client::catalogue::{PROTOCOL_VERSION, keys};
use hitq_client::error::Result;
use hitq_client::validation::check_queue_time;
use uuid::Uuid;

use crate::builder::core::QueryBuilder;

impl QueryBuilder {
    /// Protocol version (`v`).
    pub fn with_v(&mut self, protocol_version: impl Into<String>) -> &mut Self {
        self.put(keys::V, protocol_version)
    }

    /// Protocol version 1, the only one the endpoint accepts.
    pub fn with_v1(&mut self) -> &mut Self {
        self.put(keys::V, PROTOCOL_VERSION)
    }

    /// Tracking or web property id (`tid`), e.g. `UA-XXXX-Y`.
    pub fn with_tid(&mut self, tracking_id: impl Into<String>) -> &mut Self {
        self.put(keys::TID, tracking_id)
    }

    /// Anonymize the sender's IP (`aip`).
    pub fn with_aip(&mut self, anonymize_ip: bool) -> &mut Self {
        self.put_flag(keys::AIP, anonymize_ip)
    }

    /// Data source (`ds`), e.g. `web`, `app` or `call center`.
    pub fn with_ds(&mut self, data_source: impl Into<String>) -> &mut Self {
        self.put(keys::DS, data_source)
    }

    /// Queue time (`qt`): milliseconds between the hit happening and being sent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQueueTime` for a negative value. Zero is accepted.
    pub fn with_qt(&mut self, queue_time_millis: i64) -> Result<&mut Self> {
        check_queue_time(queue_time_millis)?;
        Ok(self.put(keys::QT, queue_time_millis.to_string()))
    }

    /// Queue time (`qt`) from a duration, stored in whole milliseconds.
    pub fn with_qt_duration(&mut self, queue_time: Duration) -> &mut Self {
        self.put(keys::QT, queue_time.as_millis().to_string())
    }

    /// Cache buster (`z`), sent last by convention.
    pub fn with_z(&mut self, cache_buster: impl Into<String>) -> &mut Self {
        self.put(keys::Z, cache_buster)
    }

    /// Client id (`cid`) identifying a browser or device.
    pub fn with_cid(&mut self, client_id: impl Into<String>) -> &mut Self {
        self.put(keys::CID, client_id)
    }

    /// Client id (`cid`) set to a fresh random version 4 UUID.
    pub fn with_cid_as_random_uuid(&mut self) -> &mut Self {
        self.put(keys::CID, Uuid::new_v4().to_string())
    }

    /// Known user id (`uid`).
    pub fn with_uid(&mut self, user_id: impl Into<String>) -> &mut Self {
        self.put(keys::UID, user_id)
    }

    /// Session control (`sc`): `start` or `end`.
    pub fn with_sc(&mut self, session_control: impl Into<String>) -> &mut Self {
        self.put(keys::SC, session_control)
    }

    pub fn with_sc_as_start(&mut self) -> &mut Self {
        self.put(keys::SC, "start")
    }

    pub fn with_sc_as_end(&mut self) -> &mut Self {
        self.put(keys::SC, "end")
    }

    /// IP override (`uip`).
    pub fn with_uip(&mut self, ip_override: impl Into<String>) -> &mut Self {
        self.put(keys::UIP, ip_override)
    }

    /// User agent override (`ua`).
    pub fn with_ua(&mut self, user_agent_override: impl Into<String>) -> &mut Self {
        self.put(keys::UA, user_agent_override)
    }

    /// Geographical override (`geoid`): country code or criteria id.
    pub fn with_geoid(&mut self, geographical_override: impl Into<String>) -> &mut Self {
        self.put(keys::GEOID, geographical_override)
    }
}
