//! # BS Telemetry
//!
//! Structured logging for the binary search tools.
//!
//! Logs are written to stderr so that stdout stays reserved for prompts and
//! results.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bs_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BS_LOG_LEVEL` / `RUST_LOG` | `error` | Log level filter |
//! | `BS_JSON_LOGS` | `false` | JSON formatted logs |
//! | `BS_CONSOLE_OUTPUT` | `true` | Emit logs at all |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
