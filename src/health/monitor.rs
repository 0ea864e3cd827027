//! Per-endpoint liveness monitoring.
//!
//! # Responsibilities
//! - Keep an up-to-date liveness estimate for one endpoint
//! - Probe frequently while the endpoint is live so regressions are caught
//!   quickly, back off exponentially while it is down
//! - Expose liveness synchronously without ever probing on the read path

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::{Method, StatusCode};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::HealthCheckConfig;
use crate::endpoint::Endpoint;
use crate::error::BalancerResult;
use crate::observability::metrics;

/// Mutable probe state. Liveness and the next interval are guarded together
/// so the interval for the next sleep is always derived from the liveness
/// written by the same probe.
#[derive(Debug)]
struct ProbeState {
    live: bool,
    current_interval: Duration,
}

/// State shared between the monitor handle and its background loop.
#[derive(Debug)]
struct Shared {
    url: Url,
    initial_interval: Duration,
    max_interval: Duration,
    state: Mutex<ProbeState>,
}

impl Shared {
    fn is_live(&self) -> bool {
        self.state.lock().unwrap().live
    }

    fn snapshot(&self) -> Endpoint {
        let state = self.state.lock().unwrap();
        Endpoint::new(self.url.clone(), state.live, state.current_interval)
    }

    /// Record a probe outcome and return how long to sleep before the next
    /// probe. `current_interval` stays within `[initial, max]`.
    fn record_probe(&self, live: bool) -> Duration {
        let mut state = self.state.lock().unwrap();
        state.live = live;
        state.current_interval = if live {
            self.initial_interval
        } else {
            (state.current_interval * 2).min(self.max_interval)
        };
        state.current_interval
    }

    fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.live = false;
        state.current_interval = self.initial_interval;
    }
}

/// Monitors the liveness of one upstream endpoint.
///
/// Owns a background task that probes the endpoint on an adaptive schedule.
/// A probe failure never stops the loop; only [`close`](Self::close) does.
#[derive(Debug)]
pub struct HealthMonitor {
    shared: Arc<Shared>,
    stop: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl HealthMonitor {
    /// Validate the configuration, probe the endpoint once so liveness is
    /// known before the monitor can be selected, then start the probe loop.
    pub async fn start(
        url: Url,
        client: reqwest::Client,
        config: &HealthCheckConfig,
    ) -> BalancerResult<Self> {
        config.validate()?;

        let shared = Arc::new(Shared {
            url,
            initial_interval: config.initial_interval(),
            max_interval: config.max_interval(),
            state: Mutex::new(ProbeState {
                live: false,
                current_interval: config.initial_interval(),
            }),
        });

        let probe = Probe {
            client,
            timeout: config.probe_timeout(),
            user_agent: config.user_agent.clone(),
        };

        let live = probe.check_liveness(&shared.url).await;
        let mut delay = shared.record_probe(live);
        tracing::debug!(url = %shared.url, live, "health monitor starting");

        let (stop, mut stop_rx) = watch::channel(false);
        let task = tokio::spawn({
            let shared = shared.clone();
            async move {
                loop {
                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {
                            let live = probe.check_liveness(&shared.url).await;
                            delay = shared.record_probe(live);
                        }
                        _ = stop_rx.changed() => {
                            tracing::debug!(url = %shared.url, "health monitor stopping");
                            break;
                        }
                    }
                }
            }
        });

        Ok(Self {
            shared,
            stop,
            task: Some(task),
        })
    }

    /// URL of the monitored endpoint.
    pub fn url(&self) -> &Url {
        &self.shared.url
    }

    /// Current liveness. Reads recorded state; never triggers a probe.
    pub fn is_live(&self) -> bool {
        self.shared.is_live()
    }

    /// Detached snapshot of the endpoint.
    pub fn endpoint(&self) -> Endpoint {
        self.shared.snapshot()
    }

    /// Stop the probe loop. Single-owner operation: does not return until
    /// the loop has exited, so no probe runs after `close` resolves. The
    /// endpoint is left marked not-live.
    pub async fn close(&mut self) {
        let _ = self.stop.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        self.shared.reset();
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        // close() is the orderly path; dropping an open monitor must still
        // not leak its probe task.
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// One liveness check against an endpoint.
#[derive(Debug, Clone)]
struct Probe {
    client: reqwest::Client,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Probe {
    /// Issue an OPTIONS request to the endpoint. Exactly `200 OK` counts as
    /// live; a transport error or any other status counts as not-live. The
    /// response body is drained either way so the connection can be reused.
    async fn check_liveness(&self, url: &Url) -> bool {
        let mut request = self
            .client
            .request(Method::OPTIONS, url.clone())
            .timeout(self.timeout);
        if let Some(ref agent) = self.user_agent {
            request = request.header(reqwest::header::USER_AGENT, agent.as_str());
        }

        let live = match request.send().await {
            Ok(response) => {
                let status = response.status();
                let _ = response.bytes().await;
                if status != StatusCode::OK {
                    tracing::warn!(url = %url, status = %status, "health check failed: non-success status");
                }
                status == StatusCode::OK
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "health check failed: connection error");
                false
            }
        };

        metrics::record_probe(url.as_str(), live);
        live
    }
}
