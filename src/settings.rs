//! Layered configuration.
//!
//! Values are resolved in order: built-in defaults, an optional TOML file,
//! `MCUWATCH_*` environment variables, then command-line overrides applied
//! by the binary.
//!
//! ```toml
//! endpoint = "http://192.168.1.20:8080"
//! refresh_ms = 1000
//! timeout_ms = 5000
//! warm_at = 50
//! hot_above = 85
//! accept_error_bodies = false
//! log_file = "mcuwatch.log"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use config::{Config, Environment, File, Map};
use serde::Deserialize;

use crate::data::Thresholds;
use crate::source::client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::source::poller::DEFAULT_PERIOD;
use crate::source::StatusClient;

/// Prefix for environment overrides, e.g. `MCUWATCH_ENDPOINT`.
pub const ENV_PREFIX: &str = "MCUWATCH";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bridge base URL; `/data` is appended.
    pub endpoint: String,
    /// Time between poll cycles.
    pub refresh_ms: u64,
    /// Per-request timeout.
    pub timeout_ms: u64,
    /// Lowest temperature considered warm.
    pub warm_at: f64,
    /// Highest temperature still considered warm.
    pub hot_above: f64,
    /// Render bodies of non-success responses when they parse.
    pub accept_error_bodies: bool,
    /// Where to write logs while the TUI owns the terminal.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            refresh_ms: DEFAULT_PERIOD.as_millis() as u64,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            warm_at: thresholds.warm_at,
            hot_above: thresholds.hot_above,
            accept_error_bodies: false,
            log_file: None,
        }
    }
}

impl Settings {
    /// Load settings from an optional config file and the environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, None)
    }

    /// Like [`Settings::load`], but reads `MCUWATCH_*` variables from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(
        config_path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .context("failed to read configuration")?;

        config
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Check the values make sense together.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .with_context(|| format!("invalid endpoint URL: {}", self.endpoint))?;
        ensure!(
            matches!(url.scheme(), "http" | "https"),
            "endpoint must be an http(s) URL, got {}",
            self.endpoint
        );
        ensure!(self.refresh_ms > 0, "refresh interval must be greater than zero");
        ensure!(self.timeout_ms > 0, "request timeout must be greater than zero");
        ensure!(
            self.warm_at <= self.hot_above,
            "warm threshold ({}) must not exceed hot threshold ({})",
            self.warm_at,
            self.hot_above
        );
        Ok(())
    }

    pub fn refresh(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            warm_at: self.warm_at,
            hot_above: self.hot_above,
        }
    }

    /// Build the HTTP client these settings describe.
    pub fn client(&self) -> Result<StatusClient> {
        let client = StatusClient::builder()
            .endpoint(&self.endpoint)
            .timeout(self.timeout())
            .accept_error_bodies(self.accept_error_bodies)
            .build()?;
        Ok(client)
    }
}
