//! Read-only inventory of REST APIs
//!
//! `ApiInventory` is the only thing the check knows about the cloud. The
//! AWS implementation lives in `apigateway`; tests substitute fakes.

pub mod apigateway;

use crate::error::Result;
use crate::types::{ApiResource, Region};
use async_trait::async_trait;

pub use apigateway::ApiGatewayInventory;

/// Lists the REST APIs visible to the caller's credentials in a region.
///
/// Implementations must not mutate cloud state. Authentication, network and
/// authorization failures are returned as `SmokeError::Query`; an empty
/// listing is a successful, empty `Vec`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiInventory: Send + Sync {
    /// Backend name used in logs and error messages (e.g. "aws-apigateway")
    fn provider(&self) -> &'static str;

    /// List every REST API in `region`, following pagination to the end.
    async fn list_api_resources(&self, region: &Region) -> Result<Vec<ApiResource>>;
}
