//! API endpoint handlers.
//!
//! Handlers validate input, then delegate to the application services.

pub mod analysis;
pub mod calculators;
pub mod health;
pub mod metrics;
pub mod predict;
