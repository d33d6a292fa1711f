//! Configuration structures.
//!
//! The checks themselves take no configuration; this only covers how the
//! crate's diagnostics are emitted when a host opts into
//! [`init_tracing_with`](crate::observability::init_tracing_with).

use serde::{Deserialize, Serialize};

/// Environment variable holding the tracing filter.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Environment variable that switches log output to JSON.
pub const LOG_FORMAT_ENV: &str = "STRONGLY_TYPED_LOG_FORMAT";

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Configuration from process environment variables.
    pub fn from_env() -> Self {
        Self {
            observability: ObservabilityConfig::from_env(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `STRONGLY_TYPED_LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// A blank filter falls back to `info`; the format switch matches `json`
    /// in any case.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup(LOG_FILTER_ENV)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            json_logs: lookup(LOG_FORMAT_ENV)
                .map(|v| v.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json_logs),
        }
    }
}
