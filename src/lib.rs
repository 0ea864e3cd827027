//! Client-side load balancing over a pool of HTTP endpoints.
//!
//! Keeps one background health monitor per endpoint (adaptive probing with
//! exponential backoff while an endpoint is down) and hands out live
//! endpoints in round-robin order, skipping the ones currently unreachable.
//!
//! ```no_run
//! use std::time::Duration;
//! use balancers::{Balancer, RoundRobin};
//!
//! # async fn run() -> Result<(), balancers::BalancerError> {
//! let pool = RoundRobin::builder()
//!     .initial_interval(Duration::from_secs(30))
//!     .max_interval(Duration::from_secs(300))
//!     .build(&["http://10.0.0.1:9200", "http://10.0.0.2:9200"])
//!     .await?;
//!
//! let endpoint = pool.select()?;
//! println!("next request goes to {}", endpoint.url());
//! # Ok(())
//! # }
//! ```

pub mod balancer;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod health;
pub mod observability;

pub use balancer::{Balancer, RoundRobin, RoundRobinBuilder};
pub use client::Client;
pub use config::HealthCheckConfig;
pub use endpoint::Endpoint;
pub use error::{BalancerError, BalancerResult};
pub use health::HealthMonitor;
