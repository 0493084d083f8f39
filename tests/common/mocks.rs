use api_relay::{
    Error, Result,
    proxy::{Upstream, UpstreamResponse},
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use url::Url;

/// Mock upstream for testing. Records every URL it is asked for and replies
/// with a fixed response or a transport error.
#[derive(Debug, Clone)]
pub struct MockUpstream {
    pub requests: Arc<Mutex<Vec<Url>>>,
    pub response: Option<UpstreamResponse>,
    pub error: Option<String>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: None,
            error: None,
        }
    }

    pub fn with_response(mut self, status: u16, body: Value) -> Self {
        self.response = Some(UpstreamResponse::new(status, body));
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    async fn get_json(&self, url: Url) -> Result<UpstreamResponse> {
        self.requests.lock().unwrap().push(url);

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        self.response
            .clone()
            .ok_or_else(|| Error::internal("No mock response configured"))
    }
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self::new()
    }
}
