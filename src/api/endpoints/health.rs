//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::AppContext;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub primary_model: String,
    pub explainer: String,
}

/// `GET /api/health`: liveness plus the configured model names.
pub async fn check(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        primary_model: ctx.prediction.primary_name().to_string(),
        explainer: ctx.analysis.explainer_name().to_string(),
    })
}
