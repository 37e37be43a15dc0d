//! Response payloads.
//!
//! Field declaration order is the wire order: serde serializes struct fields
//! in the order they are declared, so the JSON key order of every response
//! is fixed here.

use crate::math::{digit_sum, is_armstrong, is_perfect, is_prime, parity};
use serde::{Deserialize, Serialize};

/// Placeholder echoed in the 404 body.
pub const NOT_FOUND_PLACEHOLDER: &str = "alphabet";

/// Classification of a single integer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub number: Option<String>,
    pub error: bool,
}

impl ErrorBody {
    /// Body for a rejected `number` parameter, echoing the raw input.
    pub fn invalid_input(raw: Option<&str>) -> Self {
        Self {
            number: raw.map(str::to_string),
            error: true,
        }
    }

    /// Body for an unmatched route.
    pub fn not_found() -> Self {
        Self {
            number: Some(NOT_FOUND_PLACEHOLDER.to_string()),
            error: true,
        }
    }
}

/// `"armstrong"` when applicable, then exactly one parity tag.
pub fn properties(n: i64) -> Vec<String> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(n) {
        properties.push("armstrong".to_string());
    }
    properties.push(parity(n).to_string());
    properties
}

/// Build the full classification of `n` around an already fetched fun fact.
pub fn classify(n: i64, fun_fact: String) -> ClassificationResult {
    ClassificationResult {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties: properties(n),
        digit_sum: digit_sum(n),
        fun_fact,
    }
}
