mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;
use url::Url;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration from `CONFIG_PATH` (or `config.yaml`), applies
/// environment overrides and validates the result.
pub async fn load() -> Result<Config> {
    let explicit = env::var("CONFIG_PATH").ok();
    let config_path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    debug!("Loading configuration from: {}", config_path);

    let mut config = match load_from_path(config_path).await {
        Ok(config) => config,
        // Only the implicit default file may be absent.
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound && explicit.is_none() => {
            debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    config.apply_env_overrides(|name| env::var(name).ok())?;
    config.validate()?;

    Ok(config)
}

/// Reads and parses a YAML config file without overrides or validation.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    Config::from_yaml_str(&config_str)
}

impl Config {
    pub fn from_yaml_str(config_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(config_str)?)
    }

    /// Applies `PORT`, `HOST` and `WEATHER_API_KEY` from `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                Error::config(format!("PORT must be a valid port number, got '{}'", port))
            })?;
        }

        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }

        if let Some(key) = lookup("WEATHER_API_KEY") {
            self.upstreams.weather.api_key = ApiKey::new(key);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.upstreams.weather.api_key.is_blank() {
            return Err(Error::config(
                "No weather API key configured. Set upstreams.weather.api_key or WEATHER_API_KEY",
            ));
        }

        for (name, url) in [
            ("upstreams.dog.url", &self.upstreams.dog.url),
            ("upstreams.weather.base_url", &self.upstreams.weather.base_url),
            ("upstreams.sample.url", &self.upstreams.sample.url),
        ] {
            Url::parse(url)
                .map_err(|e| Error::config(format!("{} is not a valid URL: {}", name, e)))?;
        }

        Ok(())
    }
}
