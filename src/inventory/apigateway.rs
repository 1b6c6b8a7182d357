//! API Gateway (REST APIs, v1) inventory backed by the AWS SDK
//!
//! Credentials come from the standard `aws-config` chain (env, profile,
//! SSO, IMDS). Retries and timeouts are whatever the SDK applies by
//! default; nothing here adds more.

use crate::error::{Result, SmokeError};
use crate::inventory::ApiInventory;
use crate::types::{ApiResource, Region};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_apigateway::error::DisplayErrorContext;
use aws_sdk_apigateway::types::RestApi;
use aws_sdk_apigateway::Client as ApiGatewayClient;
use chrono::{DateTime, Utc};
use tracing::debug;

const PROVIDER: &str = "aws-apigateway";

/// Largest page API Gateway accepts for GetRestApis
const PAGE_SIZE: i32 = 500;

/// Lists REST APIs through `apigateway:GET /restapis`
pub struct ApiGatewayInventory {
    sdk_config: SdkConfig,
}

impl ApiGatewayInventory {
    /// Load the shared AWS config, optionally pinned to a named profile.
    pub async fn load(profile: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        Self::from_sdk_config(loader.load().await)
    }

    pub fn from_sdk_config(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    fn client_for(&self, region: &Region) -> ApiGatewayClient {
        let conf = aws_sdk_apigateway::config::Builder::from(&self.sdk_config)
            .region(aws_sdk_apigateway::config::Region::new(region.to_string()))
            .build();
        ApiGatewayClient::from_conf(conf)
    }
}

#[async_trait]
impl ApiInventory for ApiGatewayInventory {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn list_api_resources(&self, region: &Region) -> Result<Vec<ApiResource>> {
        list_rest_apis(&self.client_for(region), region).await
    }
}

/// Walk every `GetRestApis` page with the SDK paginator.
///
/// The paginator stops on an empty or repeated `position` token.
pub(crate) async fn list_rest_apis(
    client: &ApiGatewayClient,
    region: &Region,
) -> Result<Vec<ApiResource>> {
    let mut stream = client
        .get_rest_apis()
        .into_paginator()
        .page_size(PAGE_SIZE)
        .send();

    let mut resources = Vec::new();
    let mut pages = 0u32;
    while let Some(page) = stream.try_next().await.map_err(|e| {
        let message = DisplayErrorContext(&e).to_string();
        SmokeError::query(PROVIDER, region.as_str(), message, e.into_service_error())
    })? {
        pages += 1;
        resources.extend(page.items().iter().map(rest_api_to_resource));
    }

    debug!(
        "Listed {} REST APIs in {} ({} page(s))",
        resources.len(),
        region,
        pages
    );
    Ok(resources)
}

/// Convert an SDK `RestApi` into the descriptor the check reports on
pub(crate) fn rest_api_to_resource(api: &RestApi) -> ApiResource {
    let created_date = api
        .created_date()
        .and_then(|d| DateTime::<Utc>::from_timestamp(d.secs(), d.subsec_nanos()));

    let mut tags: Vec<(String, String)> = api
        .tags()
        .map(|t| t.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();
    tags.sort();

    ApiResource {
        id: api.id().unwrap_or("unknown").to_string(),
        name: api.name().unwrap_or_default().to_string(),
        created_date,
        tags,
    }
}
