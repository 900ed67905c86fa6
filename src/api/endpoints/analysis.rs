//! Generated analysis endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::AppContext;
use crate::application::Analysis;
use crate::domain::PatientParameters;

/// `POST /api/predict-ai`: narrative assessment from the configured explainer.
pub async fn ai(
    State(ctx): State<AppContext>,
    payload: Result<Json<PatientParameters>, JsonRejection>,
) -> Result<Json<Analysis>, ApiError> {
    let Json(params) = payload?;
    params.validate().map_err(ApiError::Validation)?;

    let service = ctx.analysis.clone();
    let analysis = tokio::task::spawn_blocking(move || service.analyze(&params)).await??;

    Ok(Json(analysis))
}
