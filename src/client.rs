//! Balanced request forwarding.
//!
//! # Responsibilities
//! - Select an endpoint for each outgoing request
//! - Rewrite the request URL's scheme and authority to the selected
//!   endpoint, leaving path and query untouched
//! - Dispatch and hand the response back unchanged
//!
//! There is no request-level retry here: a dispatch failure surfaces to the
//! caller, and only the next call picks a different endpoint.

use reqwest::{Method, Response};
use url::Url;

use crate::balancer::Balancer;
use crate::error::{BalancerError, BalancerResult};

/// HTTP client that routes every request through a balancer.
pub struct Client<B> {
    balancer: B,
    http: reqwest::Client,
}

impl<B: Balancer> Client<B> {
    /// Wrap a balancer, dispatching through a default HTTP client.
    pub fn new(balancer: B) -> Self {
        Self::with_http_client(balancer, reqwest::Client::new())
    }

    /// Wrap a balancer, dispatching through the given HTTP client.
    pub fn with_http_client(balancer: B, http: reqwest::Client) -> Self {
        Self { balancer, http }
    }

    /// The balancer backing this client.
    pub fn balancer(&self) -> &B {
        &self.balancer
    }

    /// Issue a GET request to `url`, rewritten onto a selected endpoint.
    pub async fn get(&self, url: &str) -> BalancerResult<Response> {
        self.request(Method::GET, url).await
    }

    /// Issue a request to `url`, rewritten onto a selected endpoint.
    pub async fn request(&self, method: Method, url: &str) -> BalancerResult<Response> {
        let target = Url::parse(url).map_err(|source| BalancerError::InvalidAddress {
            address: url.to_string(),
            source,
        })?;
        let endpoint = self.balancer.select()?;
        let rewritten = rewrite(&target, endpoint.url());
        tracing::debug!(url = %rewritten, "forwarding request");
        let response = self.http.request(method, rewritten).send().await?;
        Ok(response)
    }
}

/// Graft the endpoint's scheme and authority onto the target URL.
fn rewrite(target: &Url, endpoint: &Url) -> Url {
    let mut rewritten = target.clone();
    let _ = rewritten.set_scheme(endpoint.scheme());
    let _ = rewritten.set_host(endpoint.host_str());
    let _ = rewritten.set_port(endpoint.port());
    rewritten
}
