//! # Message Sanitization
//!
//! Coercion errors often quote the raw input they choked on. This module
//! redacts credentials from such text before it is logged or reported.

use once_cell::sync::Lazy;
use regex::Regex;

// Credential assignments; group 1 keeps the key and separator, the value
// may carry a `Bearer` scheme
static CREDENTIAL_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(\b(?:api[_-]?key|access[_-]?token|token|secret|password|credential)s?["']?\s*[=:]\s*["']?)(?:bearer\s+)?[^"'\s,&]+"#,
    )
    .unwrap()
});

static BEARER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bbearer\s+[A-Za-z0-9._~+/=-]+").unwrap());

static JWT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"eyJ[A-Za-z0-9_-]+\.eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+").unwrap()
});

const REDACTED: &str = "[REDACTED]";

/// Redact credentials, bearer tokens and JWTs from a message
pub fn sanitize_message(message: &str) -> String {
    let sanitized = CREDENTIAL_ASSIGNMENT.replace_all(message, "${1}[REDACTED]");
    let sanitized = BEARER_TOKEN.replace_all(&sanitized, "Bearer [REDACTED]");
    JWT.replace_all(&sanitized, REDACTED).into_owned()
}

/// Truncate to at most `max_chars` characters, marking the cut with `...`
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        message.to_string()
    } else if max_chars <= 3 {
        message.chars().take(max_chars).collect()
    } else {
        let mut truncated: String = message.chars().take(max_chars - 3).collect();
        truncated.push_str("...");
        truncated
    }
}
