use crate::{
    Result,
    config::{ApiKey, WeatherConfig},
    proxy::{Endpoint, ProxyError, QueryParams, Rejection, UpstreamResponse},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

/// Current weather for `?city=`, backed by an OpenWeather-style API.
#[derive(Debug, Clone)]
pub struct Weather {
    base_url: Url,
    api_key: ApiKey,
    units: String,
}

impl Weather {
    pub fn new(base_url: Url, api_key: ApiKey, units: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key,
            units: units.into(),
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Result<Self> {
        Ok(Self::new(
            Url::parse(&config.base_url)?,
            config.api_key.clone(),
            config.units.clone(),
        ))
    }
}

impl Endpoint for Weather {
    type Params = String;
    type Output = WeatherReport;

    const NAME: &'static str = "weather";
    const FAILURE_MESSAGE: &'static str = "Something went wrong";

    fn validate(&self, query: &QueryParams) -> std::result::Result<String, ProxyError> {
        match query.get("city").map(|c| c.trim()) {
            Some(city) if !city.is_empty() => Ok(city.to_string()),
            _ => Err(ProxyError::required("City")),
        }
    }

    fn upstream_url(&self, city: &String) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("appid", self.api_key.expose())
            .append_pair("units", &self.units);
        Ok(url)
    }

    fn interpret(
        &self,
        response: UpstreamResponse,
    ) -> std::result::Result<WeatherReport, Rejection> {
        let cod = match response.body.get("cod") {
            Some(value) => parse_cod(value)
                .ok_or_else(|| Rejection::malformed(format!("unrecognised cod value: {}", value)))?,
            None => response.status,
        };

        if cod != 200 {
            let message = response
                .body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Err(Rejection::Reported {
                status: cod,
                message,
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_value(response.body)
            .map_err(|e| Rejection::malformed(format!("weather reply: {}", e)))?;

        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| Rejection::malformed("weather reply has an empty weather list"))?;

        Ok(WeatherReport {
            city: parsed.name,
            temperature: parsed.main.temp,
            description,
        })
    }
}

/// OpenWeather sends `cod` as a number on success and as a string such as
/// `"404"` on failure.
fn parse_cod(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
