//! Error types for apigw-smoke
//!
//! Two error types: `SmokeError` (main error enum) and `ConfigError`
//! (configuration-specific).
//!
//! ## Error Handling Philosophy
//!
//! Library code uses `crate::error::Result<T>` which returns `SmokeError`.
//! The binary uses `anyhow::Result<T>` around config loading and maps the
//! final `SmokeError` to an exit code through `exit_codes`.
//!
//! ## Failure Kinds
//!
//! The check distinguishes exactly two ways of failing:
//!
//! - `Query`: the inventory could not be read (credentials, authorization,
//!   network, throttling surfaced by the SDK). Never retried here and never
//!   reinterpreted as an empty listing.
//! - `NoResources`: the listing succeeded but fewer REST APIs than required
//!   were found.
//!
//! Everything else (`Config`, `Validation`, `Json`) happens before the
//! query is issued or while rendering the report.

use thiserror::Error;

/// Main error type for apigw-smoke
#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to list REST APIs from {provider} in region {region}: {message}")]
    Query {
        provider: String,
        region: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(
        "REST APIs not found in account/region {region} (expected at least {expected}, found {found}{})",
        filter_note(.filter)
    )]
    NoResources {
        region: String,
        expected: usize,
        found: usize,
        filter: Option<String>,
    },

    #[error("Validation error: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SmokeError>;

fn filter_note(filter: &Option<String>) -> String {
    match filter {
        Some(f) => format!(" matching '{}'", f),
        None => String::new(),
    }
}

impl SmokeError {
    /// Build a `Query` error that keeps the underlying cause in the chain.
    pub fn query<E>(provider: &str, region: &str, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SmokeError::Query {
            provider: provider.to_string(),
            region: region.to_string(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True when the check ran to completion and the assertion failed,
    /// as opposed to the inventory being unreachable.
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, SmokeError::NoResources { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_no_resources_message_without_filter() {
        let err = SmokeError::NoResources {
            region: "us-east-1".to_string(),
            expected: 1,
            found: 0,
            filter: None,
        };
        let msg = err.to_string();
        assert_eq!(
            msg,
            "REST APIs not found in account/region us-east-1 (expected at least 1, found 0)"
        );
        assert!(err.is_assertion_failure());
    }

    #[test]
    fn test_no_resources_message_with_filter() {
        let err = SmokeError::NoResources {
            region: "eu-west-1".to_string(),
            expected: 2,
            found: 1,
            filter: Some("booking".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("eu-west-1"));
        assert!(msg.contains("matching 'booking'"));
        assert!(msg.contains("found 1"));
    }

    #[test]
    fn test_query_error_keeps_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "AccessDenied");
        let err = SmokeError::query("aws-apigateway", "us-east-1", "not authorized", cause);
        assert!(!err.is_assertion_failure());
        assert!(err.to_string().contains("not authorized"));
        assert!(err.source().is_some());
    }
}
