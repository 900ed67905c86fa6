//! HTTP API.
//!
//! Exposes the prediction, analysis and calculator use cases as JSON
//! endpoints under `/api/`. The router is composable: `api_router()`
//! returns a `Router` that can be mounted on any axum server.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{ctrl_c, serve};
pub use types::AppContext;
