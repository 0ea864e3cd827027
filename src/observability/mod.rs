//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Probe loops and selection produce:
//!     → tracing events (structured log lines, no subscriber installed here)
//!     → metrics.rs (liveness gauge, probe counter)
//!
//! Consumers:
//!     → whatever subscriber/exporter the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing a `tracing` subscriber or a
//!   `metrics` exporter is the application's concern
//! - Metric updates are cheap enough to sit on the probe path

pub mod metrics;
