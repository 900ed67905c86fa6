//! Heuristic adapter: the fallback scorer exposed as a `RiskPredictor`.
//!
//! Lets the rule-based model be wired anywhere a remote predictor would go,
//! for example as the primary model in offline deployments.

use crate::domain::{scoring, PatientParameters, RiskReport};
use crate::ports::{PredictError, RiskPredictor};

/// Model source name reported for heuristic results.
pub const FALLBACK_MODEL_NAME: &str = "Fallback ML Model";

/// Rule-based predictor. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPredictor;

impl HeuristicPredictor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RiskPredictor for HeuristicPredictor {
    fn name(&self) -> &str {
        FALLBACK_MODEL_NAME
    }

    fn predict(&self, params: &PatientParameters) -> Result<RiskReport, PredictError> {
        Ok(scoring::score(params))
    }
}
