//! Health check configuration.
//!
//! # Design Decisions
//! - All fields have defaults so a minimal config works out of the box
//! - Intervals are plain millisecond integers for easy deserialization;
//!   `Duration` accessors are derived
//! - Validation separates syntactic (serde) from semantic checks and runs
//!   before any monitor is created, so a bad config never leaves a partial
//!   pool of probe tasks behind

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BalancerError, BalancerResult};

/// Health check configuration applied to every endpoint in a pool.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthCheckConfig {
    /// Probe interval while an endpoint is live, in milliseconds. Also the
    /// floor the backoff schedule resets to after a successful probe.
    pub initial_interval_ms: u64,

    /// Ceiling for the backoff interval while an endpoint stays down, in
    /// milliseconds.
    pub max_interval_ms: u64,

    /// Per-probe timeout in milliseconds, independent of the probe schedule.
    pub probe_timeout_ms: u64,

    /// Optional User-Agent header sent with every probe.
    pub user_agent: Option<String>,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: 30_000,
            max_interval_ms: 300_000,
            probe_timeout_ms: 5_000,
            user_agent: None,
        }
    }
}

impl HealthCheckConfig {
    /// Semantic validation. Must pass before any monitor is constructed.
    pub fn validate(&self) -> BalancerResult<()> {
        if self.initial_interval_ms == 0 {
            return Err(BalancerError::InvalidConfig(
                "initial retry interval must be greater than zero",
            ));
        }
        if self.max_interval_ms == 0 {
            return Err(BalancerError::InvalidConfig(
                "max retry interval must be greater than zero",
            ));
        }
        if self.max_interval_ms < self.initial_interval_ms {
            return Err(BalancerError::InvalidConfig(
                "max retry interval must be greater than or equal to initial retry interval",
            ));
        }
        if self.probe_timeout_ms == 0 {
            return Err(BalancerError::InvalidConfig(
                "probe timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }

    pub fn max_interval(&self) -> Duration {
        Duration::from_millis(self.max_interval_ms)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}
