use serde::Serialize;

pub use crate::proxy::ErrorResponse;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
