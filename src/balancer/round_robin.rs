//! Round-robin selection with liveness skipping.

use std::sync::Mutex;
use std::time::Duration;

use futures_util::future::join_all;
use url::Url;

use crate::balancer::Balancer;
use crate::config::HealthCheckConfig;
use crate::endpoint::Endpoint;
use crate::error::{BalancerError, BalancerResult};
use crate::health::HealthMonitor;

/// Round-robin balancer.
///
/// Rotates through a fixed pool of monitored endpoints, transparently
/// skipping the ones currently marked not-live. The cursor advances past
/// every endpoint examined, so the next call starts after the last one
/// tried and live endpoints are offered in strict rotation.
#[derive(Debug)]
pub struct RoundRobin {
    monitors: Vec<HealthMonitor>,
    cursor: Mutex<usize>,
}

impl RoundRobin {
    /// Create a balancer from pre-built monitors. The caller controls each
    /// monitor's configuration; membership is fixed once constructed.
    pub fn new(monitors: Vec<HealthMonitor>) -> Self {
        Self {
            monitors,
            cursor: Mutex::new(0),
        }
    }

    /// Start configuring a balancer built from plain URLs.
    pub fn builder() -> RoundRobinBuilder {
        RoundRobinBuilder::default()
    }

    /// Build a balancer from URL strings with default options.
    pub async fn from_urls<S: AsRef<str>>(urls: &[S]) -> BalancerResult<Self> {
        Self::builder().build(urls).await
    }

    /// Stop every owned monitor. Returns once no probe loop survives.
    pub async fn close(&mut self) {
        for monitor in &mut self.monitors {
            monitor.close().await;
        }
    }
}

impl Balancer for RoundRobin {
    fn select(&self) -> BalancerResult<Endpoint> {
        let mut cursor = self.cursor.lock().unwrap();

        if self.monitors.is_empty() {
            return Err(BalancerError::NoConnection);
        }

        // At most one full pass: bounded even when the whole pool is down.
        for _ in 0..self.monitors.len() {
            let candidate = &self.monitors[*cursor];
            *cursor = (*cursor + 1) % self.monitors.len();
            if candidate.is_live() {
                return Ok(candidate.endpoint());
            }
        }

        Err(BalancerError::NoConnection)
    }

    fn connections(&self) -> Vec<Endpoint> {
        self.monitors.iter().map(HealthMonitor::endpoint).collect()
    }
}

/// Builder for [`RoundRobin`] pools constructed from URL strings.
///
/// Defaults: probe every 30 seconds while live, back off to at most 5
/// minutes while not, 5 second probe timeout, no custom user agent.
#[derive(Debug, Clone, Default)]
pub struct RoundRobinBuilder {
    client: Option<reqwest::Client>,
    config: HealthCheckConfig,
}

impl RoundRobinBuilder {
    /// HTTP client used for probing. Defaults to a fresh `reqwest::Client`.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Probe interval while an endpoint is live, and the floor the backoff
    /// schedule resets to after a success.
    pub fn initial_interval(mut self, interval: Duration) -> Self {
        self.config.initial_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Ceiling for the backoff interval while an endpoint stays down.
    pub fn max_interval(mut self, interval: Duration) -> Self {
        self.config.max_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Per-probe timeout, independent of the probe schedule.
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.config.probe_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// User-Agent header sent with every probe.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Apply a full configuration at once.
    pub fn config(mut self, config: HealthCheckConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration, parse every URL, then start one monitor
    /// per address. Nothing is spawned if validation or parsing fails, so a
    /// rejected build leaves no background tasks behind.
    pub async fn build<S: AsRef<str>>(self, urls: &[S]) -> BalancerResult<RoundRobin> {
        self.config.validate()?;

        let mut parsed = Vec::with_capacity(urls.len());
        for raw in urls {
            let url = Url::parse(raw.as_ref()).map_err(|source| BalancerError::InvalidAddress {
                address: raw.as_ref().to_string(),
                source,
            })?;
            parsed.push(url);
        }

        let client = self.client.unwrap_or_default();
        let monitors = join_all(
            parsed
                .into_iter()
                .map(|url| HealthMonitor::start(url, client.clone(), &self.config)),
        )
        .await
        .into_iter()
        .collect::<BalancerResult<Vec<_>>>()?;

        Ok(RoundRobin::new(monitors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_has_nothing_to_select() {
        let lb = RoundRobin::new(Vec::new());
        assert!(matches!(lb.select(), Err(BalancerError::NoConnection)));
        assert!(lb.connections().is_empty());
    }

    #[tokio::test]
    async fn invalid_intervals_fail_before_any_monitor_starts() {
        let err = RoundRobin::builder()
            .initial_interval(Duration::from_secs(10))
            .max_interval(Duration::from_secs(1))
            .build(&["http://127.0.0.1:1"])
            .await
            .unwrap_err();
        assert!(matches!(err, BalancerError::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn malformed_url_fails_construction() {
        let err = RoundRobin::from_urls(&["http://["]).await.unwrap_err();
        match err {
            BalancerError::InvalidAddress { address, .. } => assert_eq!(address, "http://["),
            other => panic!("expected InvalidAddress, got {other:?}"),
        }
    }
}
