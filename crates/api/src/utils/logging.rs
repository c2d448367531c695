//! Tracing setup and command logging helpers.

use std::time::Duration;

use chronodesk_domain::{ChronoDeskError, LoggingConfig, Result};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Output goes to stderr so
/// stdout stays clean for command output. Fails if a subscriber is already
/// installed or the filter directive is invalid.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true).with_writer(std::io::stderr)).try_init()
    };

    installed.map_err(|e| ChronoDeskError::Internal(format!("failed to install tracing subscriber: {e}")))
}

fn build_env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    // Connection pool chatter is rarely useful.
    let directives = format!("{level},hyper=warn,hyper_util=warn,reqwest=warn");
    EnvFilter::try_new(&directives)
        .map_err(|e| ChronoDeskError::Config(format!("invalid log filter '{level}': {e}")))
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"dashboard::get_dashboard"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn invalid_level_is_config_error() {
        std::env::remove_var("RUST_LOG");
        let err = build_env_filter("chronodesk=loud").unwrap_err();
        assert!(matches!(err, ChronoDeskError::Config(msg) if msg.contains("chronodesk=loud")));
    }

    #[test]
    #[serial]
    fn plain_level_is_accepted() {
        std::env::remove_var("RUST_LOG");
        assert!(build_env_filter("debug").is_ok());
    }
}
