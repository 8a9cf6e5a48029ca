//! # Structured Logging
//!
//! Subscriber setup for processes embedding the runtime, and the structured
//! event emitted when an input failure reaches the dispatch boundary.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::config::{ConfigError, ConfigProvider, ConfigProviderExt, ReportConfig, Result};
use crate::error::FunctionInputHandlingError;
use crate::report::FailureReport;

// Flag to track if logging has been initialized
static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// The log level to use (trace, debug, info, warn, error)
    pub level: String,
    /// The service name for identification
    pub service_name: String,
    /// Whether to use JSON formatting
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            service_name: "fn-runtime".to_string(),
            json_format: true,
        }
    }
}

impl LoggingConfig {
    /// Load configuration from a config provider
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            level: provider.get_string_or("log_level", &defaults.level),
            service_name: provider.get_string_or("log_service_name", &defaults.service_name),
            json_format: provider.get_bool_or("log_json", defaults.json_format),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".to_string()));
        }

        if self.service_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "log_service_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Initializes the global tracing subscriber.
///
/// Later calls are no-ops once a subscriber has been installed.
pub fn init_logging(config: Option<LoggingConfig>) -> Result<()> {
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return Ok(());
    }

    let config = config.unwrap_or_default();
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},warn", config.level)));

    let registry = Registry::default().with(filter);

    let installed = if config.json_format {
        let json_layer = fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_target(true);
        tracing::subscriber::set_global_default(registry.with(json_layer))
    } else {
        let text_layer = fmt::layer().with_target(true).with_thread_names(true);
        tracing::subscriber::set_global_default(registry.with(text_layer))
    };

    installed.map_err(|e| {
        ConfigError::Initialization(format!("Failed to set global subscriber: {}", e))
    })?;

    LOGGING_INITIALIZED.store(true, Ordering::SeqCst);

    tracing::info!(
        service = %config.service_name,
        level = %config.level,
        json = %config.json_format,
        "Structured logging initialized"
    );

    Ok(())
}

/// Whether [`init_logging`] has installed a subscriber
pub fn is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}

/// Logs an input failure at the dispatch boundary and returns what was logged
pub fn log_input_failure(
    error: &FunctionInputHandlingError,
    config: &ReportConfig,
) -> FailureReport {
    let report = FailureReport::from_error(error, config);

    tracing::warn!(
        kind = %report.kind,
        message = %report.message,
        chain_depth = report.chain_depth,
        chain_truncated = report.chain_truncated,
        causes = ?report.causes,
        "Function input handling failed"
    );

    report
}
