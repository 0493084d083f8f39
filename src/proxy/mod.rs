mod error;
mod handler;
mod upstream;

pub use error::{ErrorResponse, ProxyError, Rejection};
pub use handler::{Endpoint, ProxyHandler, QueryParams};
pub use upstream::{HttpUpstream, Upstream, UpstreamResponse};
