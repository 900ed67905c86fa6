//! Placeholder adapter for deployments without remote services.
//!
//! Implements both ports and always fails, so the prediction path falls
//! back to the heuristic scorer and the analysis path reports that no AI
//! service is configured.

use crate::domain::{PatientParameters, RiskReport};
use crate::ports::{ExplainError, PredictError, RiskExplainer, RiskPredictor};

#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl RiskPredictor for Unconfigured {
    fn name(&self) -> &str {
        "unconfigured"
    }

    fn predict(&self, _params: &PatientParameters) -> Result<RiskReport, PredictError> {
        Err(PredictError::Unavailable(
            "no prediction backend configured".to_string(),
        ))
    }
}

impl RiskExplainer for Unconfigured {
    fn name(&self) -> &str {
        "unconfigured"
    }

    fn explain(&self, _prompt: &str) -> Result<String, ExplainError> {
        Err(ExplainError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_parameters;

    #[test]
    fn test_always_fails() {
        let params = sample_parameters();
        assert!(matches!(
            RiskPredictor::predict(&Unconfigured, &params),
            Err(PredictError::Unavailable(_))
        ));
        assert_eq!(
            RiskExplainer::explain(&Unconfigured, "Patient Data:"),
            Err(ExplainError::NotConfigured)
        );
    }
}
