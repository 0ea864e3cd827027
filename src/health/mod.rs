//! Health monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! HealthMonitor::start
//!     → one probe up front (liveness known before first selection)
//!     → background loop: sleep(current interval) → probe → record outcome
//!
//! Probe outcome:
//!     live     → next interval resets to the configured floor
//!     not live → next interval doubles, capped at the configured ceiling
//! ```
//!
//! # Design Decisions
//! - Each monitor owns its own state lock; probing one endpoint never stalls
//!   probing or selecting another
//! - Probe failures are absorbed: they drive liveness and backoff, never
//!   errors at the caller
//! - Stopping is a rendezvous: `close` returns only after the loop has exited

pub mod monitor;

pub use monitor::HealthMonitor;
