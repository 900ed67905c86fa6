//! # LifeBeat
//!
//! Cardiovascular risk assessment service.
//!
//! This crate provides:
//! - A deterministic rule-based fallback scorer for heart attack risk
//! - Ports for a remote prediction model and a generative-AI explainer
//! - A JSON HTTP API with health calculators
//! - A renderer-agnostic front-end state reducer
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (patient parameters, risk reports, scoring)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (heuristic model, log redaction)
//! - `application`: Use cases orchestrating domain and ports
//! - `api`: axum HTTP surface
//! - `state`: UI state machine

pub mod adapters;
pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod state;

pub use domain::{PatientParameters, RiskLevel, RiskReport};

/// Result type for LifeBeat operations
pub type Result<T> = std::result::Result<T, LifeBeatError>;

/// Main error type for LifeBeat
#[derive(Debug, thiserror::Error)]
pub enum LifeBeatError {
    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Vec<String>> for LifeBeatError {
    fn from(errors: Vec<String>) -> Self {
        LifeBeatError::Validation(errors.join("; "))
    }
}
