pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{ErrorResponse, HealthResponse};

use crate::{Result, config::Config, proxy::HttpUpstream};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Routes for all proxied endpoints plus health check. Unknown paths and
/// unsupported methods answer with JSON errors.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/dog",
            get(handlers::dog_image).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/weather",
            get(handlers::weather).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/sample",
            get(handlers::sample).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // One pooled client shared by every endpoint
    let upstream = Arc::new(HttpUpstream::new());

    let app_state = AppState::new(&config.upstreams, upstream)?;
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
