//! Logging and observability
//!
//! Structured logging with `tracing`:
//! - Human-readable console output on stderr
//! - Configurable log levels (`--log-level`, `RUST_LOG`)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use fixture_anonymizer::logging::init_logging;
//! use fixture_anonymizer::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
