//! Configuration management for input failure reporting
//!
//! This module provides utilities for loading and validating configuration
//! for the reporting and logging side of input handling, with support for
//! environment variables.

use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The key is not set in the provider
    #[error("Configuration key not found: {0}")]
    NotFound(String),

    /// The value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A global facility could not be installed
    #[error("Initialization error: {0}")]
    Initialization(String),
}

/// Base trait for configuration providers
pub trait ConfigProvider: Send + Sync {
    /// Get a string configuration value
    fn get_string(&self, key: &str) -> Result<String>;
}

/// Extension methods for configuration providers
pub trait ConfigProviderExt: ConfigProvider {
    /// Get a typed configuration value by parsing from string
    fn get<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        <T as FromStr>::Err: std::fmt::Display,
    {
        let value = self.get_string(key)?;
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::Invalid(format!("Invalid value for key {}: {}", key, e)))
    }

    /// Get a boolean configuration value
    fn get_bool(&self, key: &str) -> Result<bool> {
        let value = self.get_string(key)?;
        match value.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid(format!(
                "Invalid boolean value for key {}: {}",
                key, value
            ))),
        }
    }

    /// Get a string configuration value with a default
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get a boolean configuration value with a default
    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    /// Get a typed value, falling back to `default` only when the key is missing.
    ///
    /// A present but malformed value is an error rather than silently ignored.
    fn get_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        <T as FromStr>::Err: std::fmt::Display,
    {
        match self.get::<T>(key) {
            Ok(value) => Ok(value),
            Err(ConfigError::NotFound(_)) => Ok(default),
            Err(e) => Err(e),
        }
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProviderExt for T {}

/// Environment variable based configuration provider
#[derive(Debug, Clone, Default)]
pub struct EnvConfigProvider {
    /// Optional prefix for environment variables
    prefix: Option<String>,

    /// Optional namespace for variables (e.g., "INPUT")
    namespace: Option<String>,
}

impl EnvConfigProvider {
    /// Create a new environment variable config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prefix for environment variables
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set a namespace for environment variables
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Format a configuration key as an environment variable
    pub(crate) fn format_key(&self, key: &str) -> String {
        let mut env_key = String::new();

        if let Some(ref prefix) = self.prefix {
            env_key.push_str(prefix);
            env_key.push('_');
        }

        if let Some(ref namespace) = self.namespace {
            env_key.push_str(namespace);
            env_key.push('_');
        }

        // uppercase, non-alphanumerics become underscores
        env_key.push_str(&key.to_uppercase().replace(|c: char| !c.is_ascii_alphanumeric(), "_"));

        env_key
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        let env_key = self.format_key(key);

        env::var(&env_key).map_err(|e| match e {
            env::VarError::NotPresent => ConfigError::NotFound(env_key),
            env::VarError::NotUnicode(_) => ConfigError::Invalid(format!(
                "Environment variable is not valid unicode: {}",
                env_key
            )),
        })
    }
}

/// In-memory config provider for testing or static configuration
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigProvider {
    values: HashMap<String, String>,
}

impl MemoryConfigProvider {
    /// Create a new empty memory config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory config provider with initial values
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Set a configuration value
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.values.insert(key.into(), value.to_string());
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))
    }
}

/// A composite config provider that tries multiple providers in order
#[derive(Default)]
pub struct CompositeConfigProvider {
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl CompositeConfigProvider {
    /// Create a new composite config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider to the end of the chain
    pub fn add_provider(&mut self, provider: impl ConfigProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Builder form of [`add_provider`](Self::add_provider)
    pub fn with_provider(mut self, provider: impl ConfigProvider + 'static) -> Self {
        self.add_provider(provider);
        self
    }
}

impl ConfigProvider for CompositeConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        for provider in &self.providers {
            match provider.get_string(key) {
                Ok(value) => return Ok(value),
                Err(ConfigError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(ConfigError::NotFound(key.to_string()))
    }
}

/// Global default configuration provider, reading `FN_INPUT_*` variables
pub static DEFAULT_PROVIDER: Lazy<Arc<EnvConfigProvider>> = Lazy::new(|| {
    Arc::new(EnvConfigProvider::new().with_prefix("FN").with_namespace("INPUT"))
});

/// Controls how input failures are rendered into reports and log events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum characters kept from each rendered message
    pub max_message_len: usize,

    /// Whether the cause chain is rendered at all
    pub include_causes: bool,

    /// Maximum number of causes rendered
    pub max_cause_depth: usize,

    /// Whether credentials are redacted from rendered text
    pub sanitize: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_message_len: 512,
            include_causes: true,
            max_cause_depth: 16,
            sanitize: true,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a config provider
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            max_message_len: provider.get_or("report_max_message_len", defaults.max_message_len)?,
            include_causes: provider.get_bool_or("report_include_causes", defaults.include_causes),
            max_cause_depth: provider.get_or("report_max_cause_depth", defaults.max_cause_depth)?,
            sanitize: provider.get_bool_or("report_sanitize", defaults.sanitize),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from [`DEFAULT_PROVIDER`]
    pub fn from_env() -> Result<Self> {
        Self::from_provider(&**DEFAULT_PROVIDER)
    }

    /// Validate this configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_message_len == 0 {
            return Err(ConfigError::Invalid(
                "report_max_message_len must be greater than zero".to_string(),
            ));
        }

        if self.max_cause_depth == 0 {
            return Err(ConfigError::Invalid(
                "report_max_cause_depth must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
