use super::{error::ApiError, ServerConfig};
use crate::fact::FactClient;
use crate::prelude::*;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use numclass_core::{
    classify::{classify, ClassificationResult},
    validate::parse_number,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub facts: FactClient,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            facts: FactClient::new(config.facts_url.clone(), config.fact_timeout)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    number: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/classify-number",
            get(classify_number).fallback(not_found),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

async fn classify_number(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ClassifyParams>, QueryRejection>,
) -> Result<Json<ClassificationResult>, ApiError> {
    let raw = match query {
        Ok(Query(params)) => params.number,
        Err(rejection) => {
            debug!("Rejected query string: {rejection}");
            return Err(ApiError::InvalidInput(None));
        }
    };

    let n = parse_number(raw.as_deref()).inspect_err(|e| debug!("Invalid input: {e}"))?;
    debug!("Classifying {n}");

    let fun_fact = state.facts.fun_fact(n).await;

    // Trial division is O(sqrt(n)); keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || classify(n, fun_fact))
        .await
        .map_err(|e| {
            warn!("Classification of {n} failed: {e}");
            ApiError::Internal(raw)
        })?;

    Ok(Json(result))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
