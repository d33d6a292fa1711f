//! Observability utilities.
//!
//! The checks emit `tracing` events on failure; nothing is printed unless the
//! host installs a subscriber, either its own or one of these.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::types::Config;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Initialize the tracing subscriber once for the process from the environment.
///
/// Log format defaults to plain text and can be switched to JSON via
/// `STRONGLY_TYPED_LOG_FORMAT=json`. Filter defaults to `info` if `RUST_LOG` is unset.
pub fn init_tracing() {
    init_tracing_with(&Config::from_env());
}

/// Initialize the tracing subscriber once for the process from explicit config.
///
/// Later calls are no-ops, whatever config they pass.
pub fn init_tracing_with(config: &Config) {
    let observability = &config.observability;
    TRACING_INIT.get_or_init(|| {
        let env_filter = EnvFilter::try_new(&observability.log_level)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let result = if observability.json_logs {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact())
                .try_init()
        };

        if let Err(err) = result {
            eprintln!("tracing init skipped: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObservabilityConfig;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing_with(&Config {
            observability: ObservabilityConfig {
                log_level: "not a [valid filter".to_string(),
                json_logs: true,
            },
        });
        assert!(TRACING_INIT.get().is_some());
    }
}
