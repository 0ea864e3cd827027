//! Endpoint snapshot type.

use std::time::Duration;

use url::Url;

/// A point-in-time view of one upstream endpoint.
///
/// Snapshots are detached from the balancer that produced them: holding or
/// mutating one has no effect on selection and cannot race with the
/// background probe loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
    live: bool,
    retry_interval: Duration,
}

impl Endpoint {
    pub(crate) fn new(url: Url, live: bool, retry_interval: Duration) -> Self {
        Self {
            url,
            live,
            retry_interval,
        }
    }

    /// URL of the upstream this endpoint addresses.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Health as of the most recent probe.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Backoff interval that was in effect when the snapshot was taken.
    pub fn retry_interval(&self) -> Duration {
        self.retry_interval
    }
}
