use crate::{
    Result,
    config::DogConfig,
    proxy::{Endpoint, ProxyError, QueryParams, Rejection, UpstreamResponse},
};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DogImageResponse {
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
struct DogCeoReply {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Random dog image. Takes no parameters.
#[derive(Debug, Clone)]
pub struct DogImage {
    url: Url,
}

impl DogImage {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn from_config(config: &DogConfig) -> Result<Self> {
        Ok(Self::new(Url::parse(&config.url)?))
    }
}

impl Endpoint for DogImage {
    type Params = ();
    type Output = DogImageResponse;

    const NAME: &'static str = "dog";
    const FAILURE_MESSAGE: &'static str = "Failed to fetch dog image";

    fn validate(&self, _query: &QueryParams) -> std::result::Result<(), ProxyError> {
        Ok(())
    }

    fn upstream_url(&self, _params: &()) -> Result<Url> {
        Ok(self.url.clone())
    }

    fn interpret(
        &self,
        response: UpstreamResponse,
    ) -> std::result::Result<DogImageResponse, Rejection> {
        let reply: DogCeoReply = serde_json::from_value(response.body)
            .map_err(|e| Rejection::malformed(format!("dog image reply: {}", e)))?;

        // The provider flags its own failures with status "error" and puts
        // the reason in `message`.
        if reply.status.as_deref() == Some("error") {
            return Err(Rejection::malformed(format!(
                "dog image provider reported an error: {}",
                reply.message
            )));
        }

        Ok(DogImageResponse {
            image_url: reply.message,
        })
    }
}
