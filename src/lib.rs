//! apigw-smoke library
//!
//! Core of the `apigw-smoke` CLI: resolve a region, list the REST APIs
//! visible there, and assert that at least one exists.

pub mod check;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod inventory;
pub mod report;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use check::{run_check, CheckOutcome, CheckReport, CheckSpec};
pub use error::{Result, SmokeError};
pub use inventory::ApiInventory;
pub use types::{ApiResource, Region};
