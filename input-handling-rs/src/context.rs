//! # Input Failure Propagation
//!
//! Extension traits for turning the errors a coercion step produces into
//! [`FunctionInputHandlingError`] values at the point of failure, so the
//! caller can propagate them with `?`.

use std::error::Error as StdError;
use std::fmt;

use crate::error::{FunctionInputHandlingError, Result};

/// Wrap the error of a failed coercion step as the cause of an input failure
pub trait InputHandlingExt<T> {
    /// Wraps the error with the given message
    fn input_context<S>(self, message: S) -> Result<T>
    where
        S: Into<String>;

    /// Wraps the error with a message built only on failure
    fn with_input_context<S, F>(self, message_fn: F) -> Result<T>
    where
        S: Into<String>,
        F: FnOnce() -> S;
}

impl<T, E> InputHandlingExt<T> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn input_context<S>(self, message: S) -> Result<T>
    where
        S: Into<String>,
    {
        self.map_err(|err| FunctionInputHandlingError::with_cause(message, err))
    }

    fn with_input_context<S, F>(self, message_fn: F) -> Result<T>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        self.map_err(|err| FunctionInputHandlingError::with_cause(message_fn(), err))
    }
}

/// Treat a missing coercion as an input failure
pub trait OptionInputExt<T> {
    /// `None` becomes a failure naming the parameter type
    fn or_no_coercion(self, type_name: impl fmt::Display) -> Result<T>;
}

impl<T> OptionInputExt<T> for Option<T> {
    fn or_no_coercion(self, type_name: impl fmt::Display) -> Result<T> {
        self.ok_or_else(|| FunctionInputHandlingError::no_applicable_coercion(type_name))
    }
}
