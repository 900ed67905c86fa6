//! Analysis service: Narrative AI assessments.
//!
//! Builds the clinical prompt from patient parameters, hands it to a
//! `RiskExplainer` and turns the raw text into the response shape served by
//! `/api/predict-ai`, always ending with the medical disclaimer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::codes::{yes_no, ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};
use crate::domain::PatientParameters;
use crate::ports::{ExplainError, RiskExplainer};

/// Label reported in `analysis_type`.
pub const ANALYSIS_TYPE: &str = "AI-Powered Medical Analysis";

/// Appended to every generated analysis.
pub const MEDICAL_DISCLAIMER: &str = "\n\n⚠️ **IMPORTANT MEDICAL DISCLAIMER**: This AI analysis is for educational purposes only and should not be used as a substitute for professional medical advice, diagnosis, or treatment. Always consult with a qualified healthcare provider for personalized medical guidance.";

const UNKNOWN: &str = "Unknown";

/// Clinical prompt sent to the explainer, with coded fields spelled out.
#[must_use]
pub fn analysis_prompt(params: &PatientParameters) -> String {
    let sex = params.sex_code().map_or(UNKNOWN, Sex::label);
    let chest_pain = params.chest_pain().map_or(UNKNOWN, ChestPainType::label);
    let ecg = params.ecg().map_or(UNKNOWN, RestingEcg::label);
    let slope = params.slope().map_or(UNKNOWN, StSlope::label);
    let thal = params.thalassemia().map_or(UNKNOWN, Thalassemia::label);

    format!(
        "As a medical AI assistant, analyze the following cardiovascular health parameters \
and provide a comprehensive risk assessment:

Patient Data:
- Age: {age} years
- Sex: {sex}
- Chest Pain Type: {chest_pain}
- Resting Blood Pressure: {bp} mmHg
- Cholesterol Level: {chol} mg/dl
- Fasting Blood Sugar > 120 mg/dl: {fbs}
- Resting ECG: {ecg}
- Maximum Heart Rate: {hr} bpm
- Exercise Induced Angina: {exang}
- ST Depression: {st}
- ST Slope: {slope}
- Major Vessels (0-3): {vessels}
- Thalassemia: {thal}

Please provide:
1. **Risk Assessment**: Overall cardiovascular risk level (Low/Moderate/High/Very High)
2. **Key Risk Factors**: Identify the most concerning parameters
3. **Protective Factors**: Identify any positive health indicators
4. **Lifestyle Recommendations**: Specific actionable advice
5. **Medical Follow-up**: When to see a healthcare provider
6. **Emergency Signs**: Warning signs that require immediate attention

Keep the analysis professional, evidence-based, and include appropriate medical disclaimers.",
        age = params.age,
        bp = params.resting_blood_pressure,
        chol = params.cholesterol,
        fbs = yes_no(params.fasting_blood_sugar_high),
        hr = params.max_heart_rate,
        exang = yes_no(params.exercise_induced_angina),
        st = params.st_depression,
        vessels = params.major_vessels_colored,
    )
}

/// Response body for `/api/predict-ai`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Generated text followed by the disclaimer
    pub prediction: String,
    pub analysis_type: String,
    pub model_used: String,
    pub timestamp: DateTime<Utc>,
}

/// Service for generated risk analyses.
pub struct AnalysisService<E>
where
    E: RiskExplainer + ?Sized,
{
    explainer: Arc<E>,
}

impl<E> AnalysisService<E>
where
    E: RiskExplainer + ?Sized,
{
    /// Create a new analysis service.
    pub fn new(explainer: Arc<E>) -> Self {
        Self { explainer }
    }

    /// Name of the configured explainer.
    #[must_use]
    pub fn explainer_name(&self) -> &str {
        self.explainer.name()
    }

    /// Generate an analysis for one patient.
    ///
    /// # Errors
    /// Returns the explainer's error, or `EmptyResponse` when it produced
    /// only whitespace.
    pub fn analyze(&self, params: &PatientParameters) -> Result<Analysis, ExplainError> {
        let text = self.explainer.explain(&analysis_prompt(params))?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ExplainError::EmptyResponse);
        }

        tracing::info!(
            "Generated analysis with '{}' ({} chars)",
            self.explainer.name(),
            text.len()
        );

        Ok(Analysis {
            prediction: format!("{text}{MEDICAL_DISCLAIMER}"),
            analysis_type: ANALYSIS_TYPE.to_string(),
            model_used: self.explainer.name().to_string(),
            timestamp: Utc::now(),
        })
    }
}
