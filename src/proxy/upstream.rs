use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Raw reply from an upstream service: HTTP status plus the decoded JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single GET against an upstream JSON API.
///
/// An `Err` means the call failed at the transport level: the connection
/// failed or the body was not JSON. Non-2xx replies with a JSON body are
/// returned as `Ok` for the endpoint to interpret.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get_json(&self, url: Url) -> Result<UpstreamResponse>;
}

pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get_json(&self, url: Url) -> Result<UpstreamResponse> {
        // Log the host only; the query string may carry a credential.
        debug!("Sending upstream GET to {}", url.host_str().unwrap_or("<unknown>"));

        let response = self.client.get(url).send().await.map_err(Error::network)?;
        let status = response.status().as_u16();
        let body: Value = response.json().await.map_err(Error::network)?;

        debug!("Upstream replied with status {}", status);

        Ok(UpstreamResponse { status, body })
    }
}
