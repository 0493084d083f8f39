use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every way a proxied request can fail, as seen by the caller.
///
/// Messages are safe to return verbatim: transport causes are logged by the
/// handler and never stored here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    UpstreamTransport { message: &'static str },

    #[error("{message}")]
    UpstreamLogical { status: StatusCode, message: String },
}

impl ProxyError {
    /// `"<field> is required"`, returned when a mandatory parameter is
    /// missing or blank.
    pub fn required(field: &str) -> Self {
        Self::Validation {
            message: format!("{} is required", field),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::UpstreamTransport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamLogical { status, .. } => *status,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_error_response())).into_response()
    }
}

/// An endpoint's verdict on an upstream body it cannot turn into output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Body is missing fields or has the wrong shape.
    Malformed(String),
    /// Upstream reachable but reported a failure of its own.
    Reported { status: u16, message: Option<String> },
}

impl Rejection {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}
