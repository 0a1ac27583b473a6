//! # Driver Configuration
//!
//! Command line flags, each with an environment variable fallback.

use bs_telemetry::TelemetryConfig;
use clap::{Parser, ValueEnum};

/// Result line format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Element found at index <i>` / `Element not found`
    #[default]
    Text,
    /// `{"status":"found","index":<i>}` / `{"status":"not_found"}`
    Json,
}

/// bsearch: binary search a sorted list of integers read from stdin
#[derive(Parser, Debug)]
#[command(name = "bsearch")]
#[command(version)]
#[command(about = "Binary search a sorted list of integers read from stdin")]
pub struct Args {
    /// Suppress prompts and print only the result line
    #[arg(short, long, env = "BS_QUIET")]
    pub quiet: bool,

    /// Result line format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "BS_FORMAT")]
    pub format: OutputFormat,

    /// Log filter, e.g. `debug` or `bs_cli=info` (overrides BS_LOG_LEVEL / RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Driver settings for this invocation.
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            prompts: !self.quiet,
            format: self.format,
        }
    }

    /// Apply logging flags on top of an environment-derived configuration.
    pub fn telemetry_config(&self, base: TelemetryConfig) -> TelemetryConfig {
        let config = match &self.log_level {
            Some(level) => base.with_log_level(level.clone()),
            None => base,
        };
        if self.json_logs {
            config.with_json_logs(true)
        } else {
            config
        }
    }
}

/// Settings that shape a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Print prompts before each read
    pub prompts: bool,
    /// Result line format
    pub format: OutputFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            prompts: true,
            format: OutputFormat::Text,
        }
    }
}

impl DriverConfig {
    /// Builder-style method to toggle prompts
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    /// Builder-style method to set the result format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
