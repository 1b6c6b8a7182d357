//! The smoke check
//!
//! One inventory query, one assertion:
//!
//! 1. list the REST APIs in the target region,
//! 2. keep the ones matching the optional name filter,
//! 3. pass if at least `min_resources` remain.
//!
//! Query failures are returned untouched so an authorization or network
//! problem is never reported as "no APIs". No retries happen at this layer.

use crate::config::Config;
use crate::error::{Result, SmokeError};
use crate::inventory::ApiInventory;
use crate::types::{ApiResource, Region};
use crate::validation::{validate_min_resources, validate_name_filter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// What to check and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSpec {
    pub region: Region,
    pub min_resources: usize,
    pub name_filter: Option<String>,
}

impl CheckSpec {
    /// At least one REST API of any name in `region`.
    pub fn new(region: Region) -> Self {
        Self {
            region,
            min_resources: 1,
            name_filter: None,
        }
    }

    pub fn with_min_resources(mut self, min: usize) -> Result<Self> {
        validate_min_resources(min)?;
        self.min_resources = min;
        Ok(self)
    }

    pub fn with_name_filter(mut self, filter: impl Into<String>) -> Result<Self> {
        let filter = filter.into();
        validate_name_filter(Some(&filter))?;
        self.name_filter = Some(filter);
        Ok(self)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut spec = Self::new(Region::new(config.aws.region.clone())?)
            .with_min_resources(config.check.min_resources)?;
        if let Some(filter) = &config.check.name_filter {
            spec = spec.with_name_filter(filter.clone())?;
        }
        Ok(spec)
    }
}

/// Terminal state of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Passed,
    Failed,
}

impl CheckOutcome {
    pub fn of(result: &Result<CheckReport>) -> Self {
        match result {
            Ok(_) => CheckOutcome::Passed,
            Err(_) => CheckOutcome::Failed,
        }
    }
}

/// Details of a passed check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub provider: String,
    pub region: String,
    pub min_resources: usize,
    pub name_filter: Option<String>,
    /// REST APIs in the region before filtering
    pub total: usize,
    /// REST APIs that counted toward the threshold
    pub resources: Vec<ApiResource>,
    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    pub fn matched(&self) -> usize {
        self.resources.len()
    }
}

/// Run the smoke check against `inventory`.
///
/// Returns `SmokeError::NoResources` when fewer than `spec.min_resources`
/// REST APIs match, and the inventory's own error when the listing fails.
pub async fn run_check<I>(inventory: &I, spec: &CheckSpec) -> Result<CheckReport>
where
    I: ApiInventory + ?Sized,
{
    info!(
        "Checking REST APIs in {} via {}",
        spec.region,
        inventory.provider()
    );

    let listed = inventory.list_api_resources(&spec.region).await?;
    let total = listed.len();

    let resources: Vec<ApiResource> = match &spec.name_filter {
        Some(filter) => listed.into_iter().filter(|r| r.matches(filter)).collect(),
        None => listed,
    };

    if resources.len() < spec.min_resources {
        warn!(
            "Found {} matching REST APIs in {} ({} total), need {}",
            resources.len(),
            spec.region,
            total,
            spec.min_resources
        );
        return Err(SmokeError::NoResources {
            region: spec.region.to_string(),
            expected: spec.min_resources,
            found: resources.len(),
            filter: spec.name_filter.clone(),
        });
    }

    info!("Found {} REST APIs in {}", resources.len(), spec.region);
    Ok(CheckReport {
        provider: inventory.provider().to_string(),
        region: spec.region.to_string(),
        min_resources: spec.min_resources,
        name_filter: spec.name_filter.clone(),
        total,
        resources,
        checked_at: Utc::now(),
    })
}
