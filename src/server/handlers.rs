use super::types::{ErrorResponse, HealthResponse};
use crate::{
    Result,
    config::UpstreamsConfig,
    endpoints::{DogImage, DogImageResponse, Sample, Weather, WeatherReport},
    proxy::{ProxyError, ProxyHandler, QueryParams, Upstream},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dog: Arc<ProxyHandler<DogImage>>,
    pub weather: Arc<ProxyHandler<Weather>>,
    pub sample: Arc<ProxyHandler<Sample>>,
}

impl AppState {
    /// Builds every endpoint against one shared upstream client.
    pub fn new(upstreams: &UpstreamsConfig, upstream: Arc<dyn Upstream>) -> Result<Self> {
        Ok(Self {
            dog: Arc::new(ProxyHandler::new(
                DogImage::from_config(&upstreams.dog)?,
                upstream.clone(),
            )),
            weather: Arc::new(ProxyHandler::new(
                Weather::from_config(&upstreams.weather)?,
                upstream.clone(),
            )),
            sample: Arc::new(ProxyHandler::new(
                Sample::from_config(&upstreams.sample)?,
                upstream,
            )),
        })
    }
}

pub async fn dog_image(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> std::result::Result<Json<DogImageResponse>, ProxyError> {
    state.dog.handle(&query).await.map(Json)
}

pub async fn weather(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> std::result::Result<Json<WeatherReport>, ProxyError> {
    state.weather.handle(&query).await.map(Json)
}

pub async fn sample(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> std::result::Result<Json<Value>, ProxyError> {
    state.sample.handle(&query).await.map(Json)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}
