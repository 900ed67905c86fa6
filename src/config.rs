//! Server and logging configuration.
//!
//! All settings come from environment variables with sensible defaults.
//! Invalid values are ignored and reported so a typo never blocks startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    #[default]
    Stdout,
    File,
}

impl LogMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdout" => Some(Self::Stdout),
            "file" => Some(Self::File),
            _ => None,
        }
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            log_mode: LogMode::Stdout,
            log_file: PathBuf::from("lifebeat.log"),
        }
    }
}

impl ServerConfig {
    /// Load config overrides from environment (best-effort).
    ///
    /// Supported:
    /// - LIFEBEAT_BIND_ADDR
    /// - LIFEBEAT_PORT, falling back to PORT
    /// - LIFEBEAT_LOG_MODE="stdout|file"
    /// - LIFEBEAT_LOG_FILE
    ///
    /// Returns the config together with one message per ignored variable.
    /// Config is read before logging is set up, so the caller logs them.
    #[must_use]
    pub fn from_env_or_default() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut cfg = Self::default();
        let mut rejected = Vec::new();

        if let Some(v) = lookup("LIFEBEAT_BIND_ADDR") {
            match v.trim().parse::<IpAddr>() {
                Ok(addr) => cfg.bind_addr = addr,
                Err(_) => rejected.push(format!("Ignoring invalid LIFEBEAT_BIND_ADDR: {v:?}")),
            }
        }

        let port = lookup("LIFEBEAT_PORT")
            .map(|v| ("LIFEBEAT_PORT", v))
            .or_else(|| lookup("PORT").map(|v| ("PORT", v)));
        if let Some((key, v)) = port {
            match v.trim().parse::<u16>() {
                Ok(p) if p > 0 => cfg.port = p,
                _ => rejected.push(format!("Ignoring invalid {key}: {v:?}")),
            }
        }

        if let Some(v) = lookup("LIFEBEAT_LOG_MODE") {
            match LogMode::parse(&v) {
                Some(mode) => cfg.log_mode = mode,
                None => rejected.push(format!("Ignoring invalid LIFEBEAT_LOG_MODE: {v:?}")),
            }
        }

        if let Some(v) = lookup("LIFEBEAT_LOG_FILE") {
            if v.trim().is_empty() {
                rejected.push("Ignoring empty LIFEBEAT_LOG_FILE".to_string());
            } else {
                cfg.log_file = PathBuf::from(v.trim());
            }
        }

        (cfg, rejected)
    }

    /// Socket address the server listens on.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
