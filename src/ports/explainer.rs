//! Risk explainer port: Trait for generated narrative analyses.
//!
//! Abstracts the generative-AI service that turns a clinical prompt into a
//! readable assessment. Prompt wording belongs to the application layer;
//! adapters only carry it to the model.

/// Errors that can occur while generating an explanation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExplainError {
    #[error("AI service is not configured")]
    NotConfigured,

    #[error("AI analysis service is temporarily unavailable: {0}")]
    Unavailable(String),

    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("Invalid API credentials")]
    InvalidCredentials,

    #[error("Empty response from AI service")]
    EmptyResponse,
}

/// Trait for narrative risk explanations.
pub trait RiskExplainer: Send + Sync {
    /// Model name reported in responses.
    fn name(&self) -> &str;

    /// Generate a free-text analysis for the given prompt.
    ///
    /// # Errors
    /// Returns `ExplainError` if the service is missing, failing or silent.
    fn explain(&self, prompt: &str) -> Result<String, ExplainError>;
}
