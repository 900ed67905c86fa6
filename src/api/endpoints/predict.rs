//! Risk prediction endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::AppContext;
use crate::application::PredictionResponse;
use crate::domain::PatientParameters;

/// `POST /api/predict-ml`: primary model with heuristic fallback.
pub async fn ml(
    State(ctx): State<AppContext>,
    payload: Result<Json<PatientParameters>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(params) = payload?;
    params.validate().map_err(ApiError::Validation)?;

    // The primary predictor may block on network I/O.
    let service = ctx.prediction.clone();
    let assessment = tokio::task::spawn_blocking(move || service.assess(&params)).await?;

    Ok(Json(assessment.to_response()))
}
