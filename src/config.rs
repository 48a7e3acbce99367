//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by
//! command-line flags, and validated before the server starts.
//!
//! ## Variables
//!
//! - `BIND_ADDRESS` - API listener (default: `0.0.0.0:8443`)
//! - `HEALTH_PROBE_BIND_ADDRESS` - probe listener (default: `0.0.0.0:9081`)
//! - `STORE_BACKEND` - `kubernetes` or `memory` (default: `kubernetes`)
//! - `NAMESPACE` - namespace holding the ShortLink resources
//!   (default: the kube client's default namespace)
//! - `ASSETS_DIR` - static files served under `/assets` (default: `html/assets`)
//! - `SHUTDOWN_TIMEOUT_SECS` - graceful drain limit (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Addresses written Go-style as `:8443` bind all interfaces.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Where shortlinks are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// ShortLink custom resources in the cluster.
    Kubernetes,
    /// Process memory; contents are lost on exit.
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kubernetes => "kubernetes",
            Self::Memory => "memory",
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub probe_bind_address: String,
    pub store_backend: StoreBackend,
    /// `None` uses the kube client's default namespace.
    pub namespace: Option<String>,
    pub assets_dir: PathBuf,
    pub shutdown_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORE_BACKEND` or `SHUTDOWN_TIMEOUT_SECS` cannot
    /// be parsed.
    pub fn from_env() -> Result<Self> {
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8443".to_string());
        let probe_bind_address =
            env::var("HEALTH_PROBE_BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:9081".to_string());

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(value) => StoreBackend::from_str(&value, true)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid STORE_BACKEND '{}'", value))?,
            Err(_) => StoreBackend::Kubernetes,
        };

        let namespace = env::var("NAMESPACE").ok().filter(|ns| !ns.is_empty());

        let assets_dir = env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("html/assets"));

        let shutdown_timeout_secs = match env::var("SHUTDOWN_TIMEOUT_SECS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid SHUTDOWN_TIMEOUT_SECS '{}'", value))?,
            Err(_) => 5,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            bind_address: normalize_bind_address(&bind_address),
            probe_bind_address: normalize_bind_address(&probe_bind_address),
            store_backend,
            namespace,
            assets_dir,
            shutdown_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either bind address is not a socket address
    /// - both listeners use the same address
    /// - `log_format` is not `text` or `json`
    /// - `shutdown_timeout_secs` is 0
    pub fn validate(&self) -> Result<()> {
        self.bind_address
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDRESS must be 'host:port', got '{}'", self.bind_address))?;

        self.probe_bind_address.parse::<SocketAddr>().with_context(|| {
            format!(
                "HEALTH_PROBE_BIND_ADDRESS must be 'host:port', got '{}'",
                self.probe_bind_address
            )
        })?;

        if self.bind_address == self.probe_bind_address {
            anyhow::bail!(
                "BIND_ADDRESS and HEALTH_PROBE_BIND_ADDRESS must differ, both are '{}'",
                self.bind_address
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.shutdown_timeout_secs == 0 {
            anyhow::bail!("SHUTDOWN_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Graceful shutdown limit.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind address: {}", self.bind_address);
        tracing::info!("  Health probe address: {}", self.probe_bind_address);
        tracing::info!("  Store backend: {}", self.store_backend.as_str());
        match &self.namespace {
            Some(namespace) => tracing::info!("  Namespace: {}", namespace),
            None => tracing::info!("  Namespace: client default"),
        }
        tracing::info!("  Assets: {}", self.assets_dir.display());
        tracing::info!("  Shutdown timeout: {}s", self.shutdown_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Expands a Go-style `:port` address to `0.0.0.0:port`.
pub fn normalize_bind_address(address: &str) -> String {
    if address.starts_with(':') {
        format!("0.0.0.0{}", address)
    } else {
        address.to_string()
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
