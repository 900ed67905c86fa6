//! Prediction service: Primary model with heuristic fallback.
//!
//! This service coordinates:
//! - Asking the primary predictor for a risk report
//! - Falling back to the local scorer on any predictor failure
//! - Shaping the outbound response

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::adapters::FALLBACK_MODEL_NAME;
use crate::domain::{scoring, PatientParameters, RiskColor, RiskLevel, RiskReport};
use crate::ports::RiskPredictor;

/// Caveat attached to every fallback response.
pub const FALLBACK_ACCURACY_NOTE: &str = "This is a simplified risk assessment. For accurate diagnosis, please consult a healthcare professional.";

/// Outcome of one prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub report: RiskReport,
    /// Name of the model that produced the report
    pub model_source: String,
    /// True when the primary predictor failed and the scorer answered
    pub fallback: bool,
}

impl Assessment {
    /// Build the outbound JSON shape.
    #[must_use]
    pub fn to_response(&self) -> PredictionResponse {
        PredictionResponse {
            message: self.report.summary(),
            probability_percentage: self.report.probability_percentage,
            risk_level: self.report.risk_level,
            risk_color: self.report.risk_color,
            risk_factors: self.report.risk_factors.clone(),
            recommendation: self.report.recommendation.clone(),
            model_source: self.model_source.clone(),
            accuracy_note: self
                .fallback
                .then(|| FALLBACK_ACCURACY_NOTE.to_string()),
        }
    }
}

/// Response body for `/api/predict-ml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub message: String,
    #[serde(rename = "Prediction_Probability_Percentage")]
    pub probability_percentage: f64,
    pub risk_level: RiskLevel,
    pub risk_color: RiskColor,
    pub risk_factors: Vec<String>,
    pub recommendation: String,
    pub model_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_note: Option<String>,
}

/// Service for heart attack risk prediction.
///
/// The primary predictor is usually a remote model. The heuristic scorer is
/// always available, so [`PredictionService::assess`] never fails.
pub struct PredictionService<P>
where
    P: RiskPredictor + ?Sized,
{
    primary: Arc<P>,
}

impl<P> PredictionService<P>
where
    P: RiskPredictor + ?Sized,
{
    /// Create a new prediction service.
    pub fn new(primary: Arc<P>) -> Self {
        Self { primary }
    }

    /// Name of the configured primary model.
    #[must_use]
    pub fn primary_name(&self) -> &str {
        self.primary.name()
    }

    /// Assess risk for one patient.
    ///
    /// Parameters are expected to be validated by the caller; the scorer is
    /// total over any input, so unvalidated values still produce a report.
    pub fn assess(&self, params: &PatientParameters) -> Assessment {
        let assessment = match self.primary.predict(params) {
            Ok(report) => Assessment {
                report,
                model_source: self.primary.name().to_string(),
                fallback: false,
            },
            Err(e) => {
                tracing::warn!(
                    "Primary model '{}' failed, using fallback: {}",
                    self.primary.name(),
                    e
                );
                Assessment {
                    report: scoring::score(params),
                    model_source: FALLBACK_MODEL_NAME.to_string(),
                    fallback: true,
                }
            }
        };

        tracing::info!(
            "Assessment complete: probability={:.1}%, level={}, source={}",
            assessment.report.probability_percentage,
            assessment.report.risk_level,
            assessment.model_source
        );

        assessment
    }
}
