use super::{
    error::{ProxyError, Rejection},
    upstream::{Upstream, UpstreamResponse},
};
use crate::Result;
use axum::http::StatusCode;
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tracing::{error, info, warn};
use url::Url;
use uuid::Uuid;

pub type QueryParams = HashMap<String, String>;

/// One proxied route: how to validate the inbound query, where to send the
/// upstream GET, and how to reshape what comes back.
pub trait Endpoint: Send + Sync {
    type Params: Send;
    type Output: Serialize + Send;

    /// Short name used in logs.
    const NAME: &'static str;

    /// Returned with status 500 whenever the upstream call cannot produce a
    /// usable body.
    const FAILURE_MESSAGE: &'static str;

    fn validate(&self, query: &QueryParams) -> std::result::Result<Self::Params, ProxyError>;

    fn upstream_url(&self, params: &Self::Params) -> Result<Url>;

    fn interpret(&self, response: UpstreamResponse) -> std::result::Result<Self::Output, Rejection>;
}

/// Single-hop proxy: validate, build URL, one upstream GET, reshape.
///
/// Holds no per-request state, so one instance serves all requests
/// concurrently.
pub struct ProxyHandler<E> {
    endpoint: E,
    upstream: Arc<dyn Upstream>,
}

impl<E: Endpoint> ProxyHandler<E> {
    pub fn new(endpoint: E, upstream: Arc<dyn Upstream>) -> Self {
        Self { endpoint, upstream }
    }

    pub async fn handle(&self, query: &QueryParams) -> std::result::Result<E::Output, ProxyError> {
        let request_id = Uuid::new_v4();

        let params = self.endpoint.validate(query).inspect_err(|e| {
            warn!(endpoint = E::NAME, %request_id, "Rejected request: {}", e);
        })?;

        let url = self.endpoint.upstream_url(&params).map_err(|e| {
            error!(endpoint = E::NAME, %request_id, "Failed to build upstream URL: {}", e);
            self.transport_failure()
        })?;

        let response = self.upstream.get_json(url).await.map_err(|e| {
            error!(endpoint = E::NAME, %request_id, "Upstream call failed: {}", e);
            self.transport_failure()
        })?;

        let upstream_status = response.status;
        match self.endpoint.interpret(response) {
            Ok(output) => {
                info!(endpoint = E::NAME, %request_id, upstream_status, "Proxied request");
                Ok(output)
            }
            Err(Rejection::Malformed(reason)) => {
                error!(
                    endpoint = E::NAME,
                    %request_id,
                    upstream_status,
                    "Unusable upstream body: {}",
                    reason
                );
                Err(self.transport_failure())
            }
            Err(Rejection::Reported { status, message }) => match reported_status(status) {
                Some(status) => {
                    warn!(endpoint = E::NAME, %request_id, %status, "Upstream reported failure");
                    Err(ProxyError::UpstreamLogical {
                        status,
                        message: message.unwrap_or_else(|| E::FAILURE_MESSAGE.to_string()),
                    })
                }
                None => {
                    error!(
                        endpoint = E::NAME,
                        %request_id,
                        status,
                        "Upstream reported a status that is not a client or server error"
                    );
                    Err(self.transport_failure())
                }
            },
        }
    }

    fn transport_failure(&self) -> ProxyError {
        ProxyError::UpstreamTransport {
            message: E::FAILURE_MESSAGE,
        }
    }
}

/// Only 4xx and 5xx codes are relayed; anything else could yield a response
/// without a JSON body.
fn reported_status(code: u16) -> Option<StatusCode> {
    StatusCode::from_u16(code)
        .ok()
        .filter(|status| status.is_client_error() || status.is_server_error())
}
