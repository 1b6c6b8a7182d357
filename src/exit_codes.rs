//! Exit code standardization for apigw-smoke
//!
//! Lets CI pipelines tell a failed assertion apart from a broken environment.
//!
//! ## Exit Code Convention
//!
//! - `0` = Check passed
//! - `1` = Check failed (REST APIs not found)
//! - `2` = System error (AWS API failure, network error, authorization)
//! - `3` = Configuration error (bad config file, invalid region, invalid threshold)

use crate::error::SmokeError;

/// Standard exit codes for apigw-smoke
pub mod codes {
    /// Check passed
    pub const SUCCESS: i32 = 0;
    /// Check ran and the assertion failed
    pub const CHECK_FAILED: i32 = 1;
    /// System error (AWS API failure, network error)
    pub const SYSTEM_ERROR: i32 = 2;
    /// Configuration error (invalid config, invalid input)
    pub const CONFIG_ERROR: i32 = 3;
}

/// Map a SmokeError to an appropriate exit code
pub fn exit_code_for_error(error: &SmokeError) -> i32 {
    use SmokeError::*;
    match error {
        NoResources { .. } => codes::CHECK_FAILED,

        Config(_) => codes::CONFIG_ERROR,
        Validation { .. } => codes::CONFIG_ERROR,

        Query { .. } => codes::SYSTEM_ERROR,
        Json(_) => codes::SYSTEM_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_assertion_failure_is_distinct_from_query_failure() {
        let missing = SmokeError::NoResources {
            region: "us-east-1".to_string(),
            expected: 1,
            found: 0,
            filter: None,
        };
        let denied = SmokeError::Query {
            provider: "aws-apigateway".to_string(),
            region: "us-east-1".to_string(),
            message: "AccessDeniedException".to_string(),
            source: None,
        };
        assert_eq!(exit_code_for_error(&missing), codes::CHECK_FAILED);
        assert_eq!(exit_code_for_error(&denied), codes::SYSTEM_ERROR);
    }

    #[test]
    fn test_config_errors() {
        let err = SmokeError::Config(ConfigError::ParseError("expected `=`".to_string()));
        assert_eq!(exit_code_for_error(&err), codes::CONFIG_ERROR);

        let err = SmokeError::Validation {
            field: "region".to_string(),
            reason: "empty".to_string(),
        };
        assert_eq!(exit_code_for_error(&err), codes::CONFIG_ERROR);
    }

    #[test]
    fn test_success_is_zero() {
        assert_eq!(codes::SUCCESS, 0);
    }
}
