//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the riskflow tracing/logging system.
///
/// Reads `RISKFLOW_LOG` for per-module log levels.
/// Format: `RISKFLOW_LOG=riskflow_inference=debug,riskflow_core=warn`
///
/// Falls back to `riskflow=info` if `RISKFLOW_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("RISKFLOW_LOG")
        .unwrap_or_else(|_| EnvFilter::new("riskflow=info"));
    install(filter, false);
}

/// Initialize tracing from the observability section of a config.
/// `RISKFLOW_LOG` still takes precedence when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env("RISKFLOW_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // try_init: an embedding host may already own the global subscriber.
        let _ = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}
