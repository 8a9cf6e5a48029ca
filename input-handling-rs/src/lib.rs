//! # Input Handling
//!
//! Failure signaling for the Phoenix ORCH function runtime's input coercion
//! step: the point where raw invocation input becomes the typed value a user
//! function parameter expects.
//!
//! This crate provides:
//!
//! - `FunctionInputHandlingError`, the single error value raised when no
//!   coercion applies to a parameter or when an applicable coercion fails
//! - Extension traits for wrapping coercion errors and propagating with `?`
//! - Full cause chain inspection
//! - Sanitized, serializable failure reports and structured logging for the
//!   dispatch boundary
//! - Configuration management utilities
//!
//! ```
//! use input_handling_rs::{InputFailureKind, InputHandlingExt};
//!
//! fn coerce(body: &str) -> input_handling_rs::Result<u32> {
//!     let value = serde_json::from_str::<u32>(body).input_context("failed to coerce JSON body")?;
//!     Ok(value)
//! }
//!
//! let err = coerce("not json").unwrap_err();
//! assert_eq!(err.message(), "failed to coerce JSON body");
//! assert_eq!(err.kind(), InputFailureKind::CoercionFailed);
//! ```

pub mod chain;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod report;
pub mod sanitization;

pub use chain::Causes;
pub use config::{ConfigError, ConfigProvider, ReportConfig};
pub use context::{InputHandlingExt, OptionInputExt};
pub use error::{BoxedCause, FunctionInputHandlingError, InputFailureKind, Result};
pub use logging::{init_logging, log_input_failure, LoggingConfig};
pub use report::FailureReport;
pub use sanitization::sanitize_message;

#[cfg(test)]
mod tests;
