//! Terminal methods
//!
//! Building the hit URL and posting it. None of these clear the builder: a
//! reused builder keeps accumulating onto the same hit.

use hitq_client::error::Result;
use hitq_client::executor::PostOutcome;
use url::Url;

use crate::builder::core::QueryBuilder;

impl QueryBuilder {
    /// POST the hit to the collect endpoint.
    ///
    /// # Returns
    /// `PostOutcome::Delivered` with the response body on 200 OK, or
    /// `PostOutcome::Disabled` when tracking is switched off
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the executor's settings are invalid,
    /// a post-failed error carrying the URI and status for any other status,
    /// and a transport error when the endpoint could not be reached.
    ///
    /// # Examples
    /// ```no_run
    /// use hitq::QueryBuilder;
    ///
    /// let outcome = QueryBuilder::new()
    ///     .with_v1()
    ///     .with_tid("UA-1-1")
    ///     .with_cid_as_random_uuid()
    ///     .with_t_as_page_view()
    ///     .with_dp("/home")?
    ///     .do_post()?;
    /// assert!(outcome.is_delivered());
    /// # Ok::<(), hitq::Error>(())
    /// ```
    pub fn do_post(&self) -> Result<PostOutcome> {
        let url = self.build();
        if self.accumulator.debug_enabled() {
            log::debug!("hitq: posting {} parameters to {}", self.accumulator.len(), url);
        }
        self.executor.execute(&url)
    }

    /// Endpoint URL with the accumulated query.
    #[must_use]
    pub fn build(&self) -> Url {
        self.accumulator.build()
    }

    /// String form of [`build`](Self::build); performs no I/O.
    #[must_use]
    pub fn escaped_uri(&self) -> String {
        self.accumulator.escaped_uri()
    }

    #[must_use]
    pub fn query_string(&self) -> String {
        self.accumulator.query_string()
    }
}
