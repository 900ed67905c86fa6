//! Adapters layer: Concrete implementations of ports.
//!
//! - `heuristic`: the rule-based fallback model as a `RiskPredictor`
//! - `unconfigured`: stand-in for absent remote services
//! - `sanitize`: credential and contact redaction for logs
//!
//! Remote HTTP adapters for the ML backend or a generative-AI vendor are not
//! shipped; integrators implement the ports in their own crates.

pub mod heuristic;
pub mod sanitize;
pub mod unconfigured;

pub use heuristic::{HeuristicPredictor, FALLBACK_MODEL_NAME};
pub use unconfigured::Unconfigured;
