//! Error definitions for the balancing library.

use thiserror::Error;

/// Errors surfaced across the library boundary.
///
/// Probe failures are deliberately absent: the health monitor absorbs them,
/// and they only ever show up as a liveness transition plus a log line.
#[derive(Debug, Error)]
pub enum BalancerError {
    /// The pool is empty or every endpoint is currently marked not-live.
    #[error("no connection available")]
    NoConnection,

    /// An endpoint address failed to parse as a URL at construction time.
    #[error("invalid endpoint address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },

    /// Retry interval configuration rejected before any monitor was started.
    #[error("invalid health check configuration: {0}")]
    InvalidConfig(&'static str),

    /// A forwarded request could not be dispatched.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for balancer operations.
pub type BalancerResult<T> = Result<T, BalancerError>;
