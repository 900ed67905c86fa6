//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the core use cases of the application.

mod analysis;
mod prediction;

pub use analysis::{
    analysis_prompt, Analysis, AnalysisService, ANALYSIS_TYPE, MEDICAL_DISCLAIMER,
};
pub use prediction::{
    Assessment, PredictionResponse, PredictionService, FALLBACK_ACCURACY_NOTE,
};
