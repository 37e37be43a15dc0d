use crate::prelude::*;
use numclass_core::fact::{extract_fact, fact_url, FALLBACK_FACT};
use std::time::Duration;

/// Client for the fun fact service.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct FactClient {
    client: reqwest::Client,
    base_url: String,
}

impl FactClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the math fact for `n`. One request, no retry.
    pub async fn fetch(&self, n: i64) -> Result<String, Error> {
        let url = fact_url(&self.base_url, n);
        debug!("Fetching fun fact from {url}");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::UpstreamStatus(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        extract_fact(&body).ok_or(Error::MalformedBody)
    }

    /// Fetch the math fact for `n`, substituting the fallback on any failure.
    pub async fn fun_fact(&self, n: i64) -> String {
        match self.fetch(n).await {
            Ok(fact) => fact,
            Err(e) => {
                warn!("Fun fact for {n} unavailable: {e}");
                FALLBACK_FACT.to_string()
            }
        }
    }
}
