//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber with text or JSON output.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
