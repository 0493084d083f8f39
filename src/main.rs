use anyhow::Result;
use api_relay::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Host part of an upstream URL; paths and query strings stay out of the logs
fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "<invalid>".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&log_level)?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting api-relay with log level: {}", log_level);
    info!(
        dog = %host_of(&config.upstreams.dog.url),
        weather = %host_of(&config.upstreams.weather.base_url),
        sample = %host_of(&config.upstreams.sample.url),
        "Configuration loaded successfully"
    );

    server::run(config).await?;

    Ok(())
}
