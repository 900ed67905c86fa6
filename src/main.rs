//! LifeBeat: Cardiovascular Risk Assessment Service
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lifebeat::adapters::sanitize::SanitizingMakeWriter;
use lifebeat::adapters::Unconfigured;
use lifebeat::api::{self, AppContext};
use lifebeat::config::{LogMode, ServerConfig};

fn main() -> Result<()> {
    let (config, rejected) = ServerConfig::from_env_or_default();

    let (writer, _guard) = match config.log_mode {
        LogMode::File => {
            if let Some(parent) = config.log_file.parent() {
                // Best-effort: a missing directory surfaces as an open error below.
                let _ = std::fs::create_dir_all(parent);
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.log_file)
                .with_context(|| format!("Failed to open log file {:?}", config.log_file))?;
            tracing_appender::non_blocking(file)
        }
        LogMode::Stdout => tracing_appender::non_blocking(std::io::stdout()),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(SanitizingMakeWriter::new(writer)))
        .init();

    for message in &rejected {
        tracing::warn!("{}", message);
    }

    tracing::info!("Starting LifeBeat v{}...", env!("CARGO_PKG_VERSION"));

    // No remote backends ship with the crate: predictions use the fallback
    // scorer and AI analysis reports that it is not configured.
    let ctx = AppContext::new(Arc::new(Unconfigured), Arc::new(Unconfigured));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    runtime.block_on(api::serve(&config, ctx, api::ctrl_c()))?;

    tracing::info!("LifeBeat shutdown complete.");
    Ok(())
}
