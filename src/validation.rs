//! Input validation utilities
//!
//! Only shape is checked here. Whether a region code actually exists is
//! decided by AWS when the query is sent.

use crate::error::{Result, SmokeError};

/// Validate a region identifier
///
/// Region codes must be non-empty and contain no whitespace.
pub fn validate_region(region: &str) -> Result<()> {
    if region.is_empty() {
        return Err(SmokeError::Validation {
            field: "region".to_string(),
            reason: "Region must not be empty".to_string(),
        });
    }

    if region.chars().any(char::is_whitespace) {
        return Err(SmokeError::Validation {
            field: "region".to_string(),
            reason: format!("Region must not contain whitespace, got: '{}'", region),
        });
    }

    Ok(())
}

/// Validate the minimum number of REST APIs the check requires.
pub fn validate_min_resources(min: usize) -> Result<()> {
    if min == 0 {
        return Err(SmokeError::Validation {
            field: "min_resources".to_string(),
            reason: "Minimum must be at least 1, a threshold of 0 always passes".to_string(),
        });
    }
    Ok(())
}

/// Validate an optional name filter. Blank filters are rejected rather
/// than silently matching everything.
pub fn validate_name_filter(filter: Option<&str>) -> Result<()> {
    if let Some(f) = filter {
        if f.trim().is_empty() {
            return Err(SmokeError::Validation {
                field: "name_filter".to_string(),
                reason: "Name filter must not be blank".to_string(),
            });
        }
    }
    Ok(())
}
