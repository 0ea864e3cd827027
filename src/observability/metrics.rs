//! Metrics collection.
//!
//! # Metrics
//! - `balancer_endpoint_live` (gauge): 1 = live, 0 = not live, per endpoint
//! - `balancer_probes_total` (counter): probes by endpoint and outcome
//!
//! # Design Decisions
//! - Uses the `metrics` facade only; the embedding application decides
//!   whether and how to export
//! - Labels carry the endpoint URL, bounded by pool size

use metrics::{counter, gauge};

/// Record the outcome of one liveness probe.
pub fn record_probe(url: &str, live: bool) {
    let outcome = if live { "live" } else { "not_live" };
    counter!("balancer_probes_total", "endpoint" => url.to_string(), "outcome" => outcome)
        .increment(1);
    gauge!("balancer_endpoint_live", "endpoint" => url.to_string())
        .set(if live { 1.0 } else { 0.0 });
}
