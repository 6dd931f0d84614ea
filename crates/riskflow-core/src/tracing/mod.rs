//! Observability for riskflow.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod setup;

pub use setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
