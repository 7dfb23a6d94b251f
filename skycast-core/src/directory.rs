//! City directory: the country display names offered by the selector.
//!
//! Backed by the public restcountries API. Fetched once at startup; there is
//! no pagination and no size cap on the returned set.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::provider::{FetchError, truncate_body};

const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: CountryName,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

/// Client for the countries directory endpoint.
#[derive(Debug, Clone)]
pub struct CityDirectory {
    http: Client,
    base_url: String,
}

impl Default for CityDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl CityDirectory {
    pub fn new() -> Self {
        Self::with_base_url(COUNTRIES_URL)
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch the common display name of every country in the directory.
    pub async fn fetch(&self) -> Result<Vec<String>, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("fields", "name")])
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

        let records: Vec<CountryRecord> = serde_json::from_str(&body)?;
        Ok(records.into_iter().map(|r| r.name.common).collect())
    }

    /// Fetch the name list, or log and fall back to an empty one.
    ///
    /// The selector stays usable as a free-text prompt either way; no error
    /// reaches the user and no retry is attempted.
    pub async fn fetch_or_empty(&self) -> Vec<String> {
        match self.fetch().await {
            Ok(names) => {
                tracing::debug!("loaded {} city names", names.len());
                names
            }
            Err(e) => {
                tracing::warn!("failed to fetch city list: {e}");
                Vec::new()
            }
        }
    }
}
