//! WeatherAPI.com current-conditions client

use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::state::{TempUnit, WeatherReading};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com";

/// Environment variable holding the provider key, read at call time.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Environment variable overriding the provider base URL.
pub const BASE_URL_ENV: &str = "WEATHER_API_BASE_URL";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("missing weather API key (set WEATHER_API_KEY)")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned HTTP {0}")]
    Status(u16),
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// Provider response
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: LocationInfo,
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct LocationInfo {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
    condition: Condition,
    wind_kph: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
}

impl From<CurrentResponse> for WeatherReading {
    fn from(data: CurrentResponse) -> Self {
        WeatherReading {
            // The Celsius field is authoritative; a new reading always starts in Celsius.
            temperature: data.current.temp_c,
            unit: TempUnit::Celsius,
            condition_text: data.current.condition.text,
            location_name: data.location.name,
            wind_speed_kph: data.current.wind_kph,
            humidity_percent: data.current.humidity,
        }
    }
}

/// Decode a `current.json` body into a reading.
pub fn parse_current(body: &str) -> Result<WeatherReading, FetchError> {
    let data: CurrentResponse = serde_json::from_str(body)?;
    Ok(data.into())
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

fn current_url(base_url: &str, api_key: &str, query: &str) -> String {
    format!(
        "{}/v1/current.json?key={}&q={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(api_key),
        urlencoding::encode(query)
    )
}

// ============================================================================
// Weather API
// ============================================================================

/// Fetch current conditions for `query`.
///
/// Any failure is returned as a `FetchError`; callers treat all of them alike.
pub async fn fetch_current(
    base_url: &str,
    api_key: Option<&str>,
    query: &str,
) -> Result<WeatherReading, FetchError> {
    let api_key = api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or(FetchError::MissingApiKey)?;

    tracing::debug!(base_url, query, "fetching current weather");
    let url = current_url(base_url, api_key, query);

    let response = http_client().get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let reading = parse_current(&body)?;
    tracing::debug!(
        location = %reading.location_name,
        temperature = reading.temperature,
        "weather loaded"
    );
    Ok(reading)
}
