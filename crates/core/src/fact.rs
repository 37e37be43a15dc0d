//! Fun fact helpers for the Numbers API (`numbersapi.com`).
//!
//! The HTTP call itself lives in the shell; this module only decides what to
//! ask for and how to read the answer.

use serde::Deserialize;

/// Default base URL of the fun fact service.
pub const DEFAULT_FACTS_URL: &str = "http://numbersapi.com";

/// Substituted for the fun fact whenever the service cannot supply one.
pub const FALLBACK_FACT: &str = "No fun fact available";

/// JSON body returned by `/{n}/math?json`.
#[derive(Debug, Deserialize)]
pub struct FactResponse {
    pub text: Option<String>,
}

/// URL of the math fact for `n`, requesting a JSON body.
pub fn fact_url(base: &str, n: i64) -> String {
    format!("{}/{n}/math?json", base.trim_end_matches('/'))
}

/// Extract the trimmed trivia text from a JSON response body.
///
/// Returns `None` for malformed bodies or a missing or blank `text` field.
pub fn extract_fact(body: &str) -> Option<String> {
    let response: FactResponse = serde_json::from_str(body).ok()?;
    let text = response.text?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// The fun fact for a response body, or [`FALLBACK_FACT`].
pub fn fact_or_fallback(body: Option<&str>) -> String {
    body.and_then(extract_fact)
        .unwrap_or_else(|| FALLBACK_FACT.to_string())
}
