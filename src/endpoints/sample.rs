use crate::{
    Result,
    config::SampleConfig,
    proxy::{Endpoint, ProxyError, QueryParams, Rejection, UpstreamResponse},
};
use serde_json::Value;
use url::Url;

/// Passes the upstream JSON body through untouched.
#[derive(Debug, Clone)]
pub struct Sample {
    url: Url,
}

impl Sample {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn from_config(config: &SampleConfig) -> Result<Self> {
        Ok(Self::new(Url::parse(&config.url)?))
    }
}

impl Endpoint for Sample {
    type Params = ();
    type Output = Value;

    const NAME: &'static str = "sample";
    const FAILURE_MESSAGE: &'static str = "Failed to fetch sample data";

    fn validate(&self, _query: &QueryParams) -> std::result::Result<(), ProxyError> {
        Ok(())
    }

    fn upstream_url(&self, _params: &()) -> Result<Url> {
        Ok(self.url.clone())
    }

    fn interpret(&self, response: UpstreamResponse) -> std::result::Result<Value, Rejection> {
        if !response.is_success() {
            return Err(Rejection::Reported {
                status: response.status,
                message: None,
            });
        }
        Ok(response.body)
    }
}
