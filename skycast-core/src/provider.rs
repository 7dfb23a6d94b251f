use crate::{Config, model::WeatherSnapshot, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod weatherapi;

/// Failure modes of one outbound fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The body arrived but did not match the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Seam between the weather panel and a concrete forecast backend.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions plus today's hourly forecast for a location
    /// name. The name is passed through as an opaque query term.
    async fn forecast(&self, location: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the production provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No weather API key configured.\n\
             Hint: run `skycast configure` and enter your key, or set WEATHER_API_KEY."
        )
    })?;

    Ok(Box::new(WeatherApiProvider::new(api_key)))
}

/// Clip a response body for inclusion in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Byte 200 may fall inside a multibyte character; cut at the
        // nearest boundary at or before it.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
