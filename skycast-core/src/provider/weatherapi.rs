use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::model::{HourlyPoint, WeatherSnapshot};
use crate::provider::{FetchError, WeatherProvider, truncate_body};

const FORECAST_URL: &str = "https://api.weatherapi.com/v1/forecast.json";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// WeatherAPI.com client. One day of hourly forecast per request.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: Client,
    base_url: String,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, FORECAST_URL)
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            http: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    async fn fetch_forecast(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", "1"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: WaForecastResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
    humidity: u8,
    wind_kph: f64,
    cloud: u8,
}

#[derive(Debug, Deserialize)]
struct WaForecastHour {
    time_epoch: i64,
    /// Absent in some payloads; display falls back to the epoch.
    #[serde(default)]
    time: String,
    temp_c: f64,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    hour: Vec<WaForecastHour>,
}

#[derive(Debug, Deserialize, Default)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    current: WaCurrent,
    #[serde(default)]
    forecast: WaForecast,
}

impl From<WaForecastResponse> for WeatherSnapshot {
    fn from(parsed: WaForecastResponse) -> Self {
        // An empty forecastday array degrades to no hourly points rather
        // than an error; current conditions are still worth showing.
        let hourly = parsed
            .forecast
            .forecastday
            .into_iter()
            .next()
            .map(|day| {
                day.hour
                    .into_iter()
                    .map(|h| HourlyPoint {
                        time_epoch: h.time_epoch,
                        time: h.time,
                        temp_c: h.temp_c,
                    })
                    .collect()
            })
            .unwrap_or_default();

        WeatherSnapshot {
            location_name: parsed.location.name,
            localtime: parsed.location.localtime,
            temp_c: parsed.current.temp_c,
            condition: parsed.current.condition.text,
            humidity_pct: parsed.current.humidity,
            wind_kph: parsed.current.wind_kph,
            cloud_pct: parsed.current.cloud,
            hourly,
        }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn forecast(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        self.fetch_forecast(location).await
    }
}
