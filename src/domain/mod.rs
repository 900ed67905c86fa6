//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O. The fallback scorer,
//! the clinical code tables and the health calculators all live here.

pub mod calculators;
pub mod codes;
mod patient;
mod risk;
pub mod scoring;

pub use codes::{ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};
pub use patient::{PatientParameters, PARAMETER_NAMES};
pub use risk::{
    recommendation_for, RiskColor, RiskLevel, RiskReport, HIGH_RISK_RECOMMENDATION,
    LOW_RISK_RECOMMENDATION, MODERATE_RISK_RECOMMENDATION,
};
pub use scoring::score;

#[cfg(test)]
pub(crate) use patient::sample_parameters;
