use api_relay::config::{
    ApiKey, Config, DogConfig, LogsConfig, SampleConfig, ServerConfig, UpstreamsConfig,
    WeatherConfig,
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

pub const TEST_API_KEY: &str = "test-api-key";

/// Upstream config pointing every endpoint at `base` (e.g. a wiremock server).
pub fn create_test_upstreams(base: &str) -> UpstreamsConfig {
    UpstreamsConfig {
        dog: DogConfig {
            url: format!("{}/api/breeds/image/random", base),
        },
        weather: WeatherConfig {
            base_url: format!("{}/data/2.5/weather", base),
            api_key: ApiKey::new(TEST_API_KEY),
            units: "metric".to_string(),
        },
        sample: SampleConfig {
            url: format!("{}/users", base),
        },
    }
}

/// Create a test configuration with sensible defaults
pub fn create_test_config(base: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        upstreams: create_test_upstreams(base),
    }
}

/// Sends a GET through the router and returns status, headers and JSON body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, headers, body)
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8081
  logs:
    level: "debug"

upstreams:
  dog:
    url: "http://localhost:9000/api/breeds/image/random"
  weather:
    base_url: "http://localhost:9000/data/2.5/weather"
    api_key: "yaml-key"
    units: "imperial"
  sample:
    url: "http://localhost:9000/users"
"#;

/// Configuration with only the weather key set; everything else defaults
pub const MINIMAL_CONFIG_YAML: &str = r#"
upstreams:
  weather:
    api_key: "minimal-key"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
