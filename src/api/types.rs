//! Shared state for the HTTP layer.

use std::sync::Arc;

use crate::application::{AnalysisService, PredictionService};
use crate::ports::{RiskExplainer, RiskPredictor};

/// Shared context for all API routes.
///
/// Services sit behind trait objects so the binary can pick adapters at
/// startup without the router becoming generic.
#[derive(Clone)]
pub struct AppContext {
    pub prediction: Arc<PredictionService<dyn RiskPredictor>>,
    pub analysis: Arc<AnalysisService<dyn RiskExplainer>>,
}

impl AppContext {
    pub fn new(predictor: Arc<dyn RiskPredictor>, explainer: Arc<dyn RiskExplainer>) -> Self {
        Self {
            prediction: Arc::new(PredictionService::new(predictor)),
            analysis: Arc::new(AnalysisService::new(explainer)),
        }
    }
}
