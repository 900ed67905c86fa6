//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and the remote prediction and explanation
//! services. Each is fallible and can be substituted independently.

mod explainer;
mod predictor;

pub use explainer::{ExplainError, RiskExplainer};
pub use predictor::{PredictError, RiskPredictor};
