//! Endpoint selection subsystem.
//!
//! # Data Flow
//! ```text
//! Caller → Balancer::select()
//!     → rotate the cursor over the pool (at most one full pass)
//!     → skip endpoints whose monitor reports not-live
//!     → return the first live endpoint, or "no connection available"
//! ```
//!
//! # Design Decisions
//! - Selection policies are trait implementations, not subclasses; the trait
//!   carries exactly the two operations callers need
//! - select() and connections() are synchronous; only the probe loops are
//!   background tasks
//! - connections() hands out copies, never live balancer state

pub mod round_robin;

pub use round_robin::{RoundRobin, RoundRobinBuilder};

use crate::endpoint::Endpoint;
use crate::error::BalancerResult;

/// A selection policy over a fixed pool of monitored endpoints.
pub trait Balancer {
    /// Pick the endpoint the next request should go to.
    ///
    /// Fails with [`BalancerError::NoConnection`](crate::error::BalancerError::NoConnection)
    /// when the pool is empty or no endpoint is currently live — from the
    /// caller's perspective both mean "nothing to route to".
    fn select(&self) -> BalancerResult<Endpoint>;

    /// Point-in-time copies of every endpoint in the pool.
    fn connections(&self) -> Vec<Endpoint>;
}
