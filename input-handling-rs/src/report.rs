//! # Failure Reports
//!
//! A [`FailureReport`] is the rendered, serializable snapshot of an input
//! failure that the dispatch boundary logs or translates before discarding
//! the error. The error value itself is never modified or truncated.

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::{FunctionInputHandlingError, InputFailureKind};
use crate::sanitization::{sanitize_message, truncate_message};

/// Rendered view of a [`FunctionInputHandlingError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Which of the two failure cases occurred
    pub kind: InputFailureKind,
    /// The rendered failure message
    pub message: String,
    /// Rendered cause chain, outermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
    /// Number of causes in the error's chain, rendered or not
    pub chain_depth: usize,
    /// Set when some causes were left out of `causes`
    #[serde(default)]
    pub chain_truncated: bool,
}

impl FailureReport {
    /// Render `error` according to `config`
    pub fn from_error(error: &FunctionInputHandlingError, config: &ReportConfig) -> Self {
        let render = |text: &str| -> String {
            let text = if config.sanitize {
                sanitize_message(text)
            } else {
                text.to_string()
            };
            truncate_message(&text, config.max_message_len)
        };

        let chain_depth = error.causes().count();

        let causes: Vec<String> = if config.include_causes {
            error
                .causes()
                .take(config.max_cause_depth)
                .map(|cause| render(&cause.to_string()))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            kind: error.kind(),
            message: render(error.message()),
            chain_truncated: causes.len() < chain_depth,
            causes,
            chain_depth,
        }
    }

    /// Render the report as JSON, in the same shape as its `Serialize` impl
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl From<&FunctionInputHandlingError> for FailureReport {
    fn from(error: &FunctionInputHandlingError) -> Self {
        Self::from_error(error, &ReportConfig::default())
    }
}
