//! Risk predictor port: Trait for the primary prediction model.
//!
//! This trait abstracts the remote ML backend from the application logic so
//! the fallback scorer can stand in for it and be tested without a network.

use crate::domain::{PatientParameters, RiskReport};

/// Errors that can occur while asking a predictor for a risk report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("Prediction service unavailable: {0}")]
    Unavailable(String),

    #[error("Prediction timed out after {0}s")]
    Timeout(u64),

    #[error("Prediction service returned status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid prediction response: {0}")]
    InvalidResponse(String),
}

/// Trait for risk prediction.
///
/// Implementations may block (for example on network I/O); callers on an
/// async runtime should run them on a blocking thread.
pub trait RiskPredictor: Send + Sync {
    /// Name reported as the model source in responses.
    fn name(&self) -> &str;

    /// Produce a risk report for the given parameters.
    ///
    /// # Errors
    /// Returns `PredictError` when the model cannot produce a usable result.
    fn predict(&self, params: &PatientParameters) -> Result<RiskReport, PredictError>;
}
