//! tracing-subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Build the level filter for a configuration.
///
/// Environment variables are already folded into `config.log_level` by
/// [`TelemetryConfig::from_env`], so command line overrides applied on top of
/// it take precedence.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::InvalidFilter(format!("{}: {}", config.log_level, e)))
}

/// Install the global subscriber. Logs go to stderr.
///
/// Does nothing when `console_output` is disabled.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    if !config.console_output {
        return Ok(());
    }

    let env_filter = build_filter(config)?;

    let json_layer = config.json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    let fmt_layer = (!config.json_logs).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_levels_and_directives() {
        for level in ["trace", "debug", "info", "warn", "error", "bs_cli=debug,warn"] {
            let config = TelemetryConfig::default().with_log_level(level);
            assert!(build_filter(&config).is_ok(), "rejected {level}");
        }
    }

    #[test]
    fn test_filter_rejects_garbage() {
        let config = TelemetryConfig::default().with_log_level("bs_cli=notalevel");
        assert!(matches!(
            build_filter(&config),
            Err(TelemetryError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_disabled_output_skips_install() {
        let config = TelemetryConfig {
            console_output: false,
            ..Default::default()
        };
        assert!(init_logging(&config).is_ok());
    }
}
