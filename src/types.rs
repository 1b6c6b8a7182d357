//! Type definitions shared by the check and the inventory backends

use crate::error::{Result, SmokeError};
use crate::validation::validate_region;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Region checked when nothing else is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Cloud region identifier (e.g. `us-east-1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        validate_region(&code)?;
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Region {
    fn default() -> Self {
        Self(DEFAULT_REGION.to_string())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Region {
    type Err = SmokeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Region {
    type Error = SmokeError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}

/// A REST API as returned by the inventory
///
/// The check itself only counts these; the fields are carried for the
/// report and for name/tag filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub id: String,
    pub name: String,
    pub created_date: Option<DateTime<Utc>>,
    pub tags: Vec<(String, String)>,
}

impl ApiResource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_date: None,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    /// Name contains `filter`, or some tag value equals it.
    pub fn matches(&self, filter: &str) -> bool {
        self.name.contains(filter) || self.tags.iter().any(|(_, v)| v == filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_default() {
        assert_eq!(Region::default().as_str(), "us-east-1");
    }

    #[test]
    fn test_region_parse() {
        let region: Region = "eu-central-1".parse().unwrap();
        assert_eq!(region.to_string(), "eu-central-1");
        assert!("".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_serde_rejects_empty() {
        let ok: Region = serde_json::from_str("\"sa-east-1\"").unwrap();
        assert_eq!(ok.as_str(), "sa-east-1");
        assert!(serde_json::from_str::<Region>("\"\"").is_err());
    }

    #[test]
    fn test_resource_matches_name_or_tag() {
        let api = ApiResource::new("a1b2c3", "booking-api-prod").with_tag("Project", "salon");

        assert!(api.matches("booking"));
        assert!(api.matches("salon"));
        assert!(!api.matches("Project"));
        assert!(!api.matches("payments"));
    }
}
