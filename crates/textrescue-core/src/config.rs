//! Pipeline configuration: file, environment, defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_MAX_CONCURRENCY: usize = 4;
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 500;

pub const ENV_MAX_CONCURRENCY: &str = "TEXTRESCUE_MAX_CONCURRENCY";
pub const ENV_CALL_TIMEOUT_SECS: &str = "TEXTRESCUE_CALL_TIMEOUT_SECS";
pub const ENV_SIMULATED_LATENCY_MS: &str = "TEXTRESCUE_SIMULATED_LATENCY_MS";

/// Top-level rescue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescueConfig {
    /// Maximum model calls in flight during one rescue.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Upper bound on a single model call.
    #[serde(default = "default_call_timeout_secs")]
    pub call_timeout_secs: u64,
    /// Latency of the canned model.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

fn default_max_concurrency() -> usize {
    DEFAULT_MAX_CONCURRENCY
}
fn default_call_timeout_secs() -> u64 {
    DEFAULT_CALL_TIMEOUT_SECS
}
fn default_simulated_latency_ms() -> u64 {
    DEFAULT_SIMULATED_LATENCY_MS
}

impl Default for RescueConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            call_timeout_secs: DEFAULT_CALL_TIMEOUT_SECS,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
        }
    }
}

impl RescueConfig {
    /// Load config from a JSON file, then apply env overrides.
    ///
    /// A missing, unreadable or invalid file falls back to defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config = match Self::read_file(config_path) {
            Ok(Some(c)) => {
                info!("Loaded rescue config from {}", config_path.display());
                c
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Ignoring config {}: {}", config_path.display(), e);
                Self::default()
            }
        };
        config.apply_env();
        config
    }

    /// Parse a JSON config file without env overrides.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn read_file(config_path: &Path) -> Result<Option<Self>> {
        let raw = match std::fs::read_to_string(config_path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Defaults with env overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Some(n) = env_parse(ENV_MAX_CONCURRENCY) {
            self.max_concurrency = n;
        }
        if let Some(n) = env_parse(ENV_CALL_TIMEOUT_SECS) {
            self.call_timeout_secs = n;
        }
        if let Some(n) = env_parse(ENV_SIMULATED_LATENCY_MS) {
            self.simulated_latency_ms = n;
        }
    }

    /// Reject settings the orchestrator cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrency == 0 {
            return Err(Error::Config("max_concurrency must be at least 1".into()));
        }
        if self.call_timeout_secs == 0 {
            return Err(Error::Config("call_timeout_secs must be at least 1".into()));
        }
        Ok(())
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}
