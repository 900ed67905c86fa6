//! Health calculator endpoints.
//!
//! Four endpoints, all pure computations over the request body:
//! - `POST /api/calculators/bmi`
//! - `POST /api/calculators/bmr`
//! - `POST /api/calculators/blood-pressure`
//! - `POST /api/calculators/cholesterol`

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::domain::calculators::{self, BloodPressureEstimate, BmiResult, CholesterolEstimate};
use crate::domain::Sex;

#[derive(Debug, Deserialize)]
pub struct BmiRequest {
    /// Kilograms
    pub weight: f64,
    /// Meters
    pub height: f64,
}

#[derive(Debug, Deserialize)]
pub struct BmrRequest {
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    pub age: f64,
    pub gender: Sex,
}

#[derive(Debug, Serialize)]
pub struct BmrResponse {
    /// Kilocalories per day
    pub bmr: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressureRequest {
    pub age: f64,
    pub heart_rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct CholesterolRequest {
    pub age: f64,
    pub gender: Sex,
}

/// `POST /api/calculators/bmi`
pub async fn bmi(
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> Result<Json<BmiResult>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(calculators::bmi(req.weight, req.height)?))
}

/// `POST /api/calculators/bmr`
pub async fn bmr(
    payload: Result<Json<BmrRequest>, JsonRejection>,
) -> Result<Json<BmrResponse>, ApiError> {
    let Json(req) = payload?;
    let bmr = calculators::bmr(req.weight, req.height, req.age, req.gender)?;
    Ok(Json(BmrResponse { bmr }))
}

/// `POST /api/calculators/blood-pressure`
pub async fn blood_pressure(
    payload: Result<Json<BloodPressureRequest>, JsonRejection>,
) -> Result<Json<BloodPressureEstimate>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(calculators::estimate_blood_pressure(
        req.age,
        req.heart_rate,
    )))
}

/// `POST /api/calculators/cholesterol`
pub async fn cholesterol(
    payload: Result<Json<CholesterolRequest>, JsonRejection>,
) -> Result<Json<CholesterolEstimate>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(calculators::estimate_cholesterol(req.age, req.gender)))
}
