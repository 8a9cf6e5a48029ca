//! # Input Handling Failures
//!
//! This module provides the error value a function runtime produces when raw
//! invocation input cannot be converted into the typed value a parameter
//! requires, or when no input coercion applies to the parameter at all.

use std::error::Error as StdError;
use std::fmt;
use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chain::{self, Causes};

/// Boxed cause carried by a [`FunctionInputHandlingError`]
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// A type alias for Result with the error type defaulting to [`FunctionInputHandlingError`]
pub type Result<T, E = FunctionInputHandlingError> = std::result::Result<T, E>;

/// The two ways input handling can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFailureKind {
    /// No input coercion was applicable to the parameter
    NoApplicableCoercion,
    /// An applicable coercion was attempted and failed
    CoercionFailed,
}

impl fmt::Display for InputFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFailureKind::NoApplicableCoercion => write!(f, "no_applicable_coercion"),
            InputFailureKind::CoercionFailed => write!(f, "coercion_failed"),
        }
    }
}

/// Raised when invocation input could not be turned into a typed parameter value.
///
/// The value is immutable once built: the message and cause are only reachable
/// through shared references, or moved out whole with [`into_parts`].
///
/// [`into_parts`]: FunctionInputHandlingError::into_parts
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FunctionInputHandlingError {
    message: String,
    #[source]
    cause: Option<BoxedCause>,
}

impl FunctionInputHandlingError {
    /// Create a failure detected directly, with no underlying error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a failure raised while delegating to a coercion that itself failed.
    ///
    /// A [`BoxedCause`] is stored as is, so the attached error is the same
    /// allocation the caller handed over. A typed `Box<E>` goes through
    /// [`with_boxed_cause`](Self::with_boxed_cause) to keep that guarantee.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxedCause>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Create a failure from a typed boxed cause without boxing it again
    pub fn with_boxed_cause<E>(message: impl Into<String>, cause: Box<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let cause: BoxedCause = cause;
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Create a failure for a parameter type that no coercion accepts
    pub fn no_applicable_coercion(type_name: impl fmt::Display) -> Self {
        Self::new(format!(
            "no input coercion available for parameter of type {}",
            type_name
        ))
    }

    /// Same as [`no_applicable_coercion`](Self::no_applicable_coercion), naming `T`
    pub fn no_applicable_coercion_for<T: ?Sized>() -> Self {
        Self::no_applicable_coercion(std::any::type_name::<T>())
    }

    /// The human-readable description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying error, if one was attached
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Whether an underlying error was attached
    pub fn has_cause(&self) -> bool {
        self.cause.is_some()
    }

    /// Which failure case this is, derived from whether a cause is attached
    pub fn kind(&self) -> InputFailureKind {
        if self.has_cause() {
            InputFailureKind::CoercionFailed
        } else {
            InputFailureKind::NoApplicableCoercion
        }
    }

    /// Iterate the full cause chain, starting at the attached cause
    pub fn causes(&self) -> Causes<'_> {
        Causes::new(self.source())
    }

    /// The deepest error in the chain, or `None` without a cause
    pub fn root_cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.source().map(chain::root_cause)
    }

    /// Consume the failure, handing message and cause to the caller
    pub fn into_parts(self) -> (String, Option<BoxedCause>) {
        (self.message, self.cause)
    }
}

impl From<serde_json::Error> for FunctionInputHandlingError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_cause("failed to coerce JSON input", err)
    }
}

impl From<FromUtf8Error> for FunctionInputHandlingError {
    fn from(err: FromUtf8Error) -> Self {
        Self::with_cause("failed to decode input as UTF-8", err)
    }
}
