//! GA4 Data API report client

use crate::auth::GaAuth;
use crate::credentials::decode_credentials;
use crate::types::{RunReportRequest, RunReportResponse};
use async_trait::async_trait;
use heyga_core::{Error, Result};
use std::time::Duration;
use tracing::{debug, error};

/// Capability for running GA4 reports.
///
/// The pageviews tool depends on this trait rather than on a concrete
/// client, so tests and embedders can inject a double.
#[async_trait]
pub trait ReportClient: Send + Sync {
    /// Issue one report request scoped to the given property.
    async fn run_report(
        &self,
        property_id: &str,
        request: RunReportRequest,
    ) -> Result<RunReportResponse>;
}

/// HTTP client for the GA4 Data API (v1beta).
pub struct DataApiClient {
    client: reqwest::Client,
    auth: GaAuth,
    base_url: String,
}

impl DataApiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://analyticsdata.googleapis.com/v1beta";

    /// Create a client with the given authentication method.
    pub fn new(auth: GaAuth) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("heyga/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            auth,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client from a base64-encoded service-account blob.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let key = decode_credentials(encoded)?;
        Self::new(GaAuth::ServiceAccount(key))
    }

    /// Override the API base URL (tests point this at a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ReportClient for DataApiClient {
    async fn run_report(
        &self,
        property_id: &str,
        request: RunReportRequest,
    ) -> Result<RunReportResponse> {
        let token = self.auth.access_token(&self.client).await?;
        let url = format!("{}/properties/{}:runReport", self.base_url, property_id);

        debug!("Running GA4 report: POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("GA4 report request failed: {} - {}", status, body);

            return Err(Error::upstream(format!(
                "runReport failed ({status}): {body}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DateRange, Dimension, Metric};
    use serde_json::json;

    fn test_request() -> RunReportRequest {
        RunReportRequest {
            date_ranges: vec![DateRange {
                start_date: "7daysAgo".to_string(),
                end_date: "today".to_string(),
            }],
            dimensions: vec![Dimension::new("fullPageUrl")],
            metrics: vec![Metric::new("totalUsers")],
        }
    }

    fn test_client(base_url: String) -> DataApiClient {
        DataApiClient::new(GaAuth::BearerToken("test-token".to_string()))
            .unwrap()
            .with_base_url(base_url)
    }

    #[tokio::test]
    async fn test_run_report_posts_request_and_parses_rows() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/properties/123456:runReport")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "rows": [{
                        "dimensionValues": [{"value": "/a"}],
                        "metricValues": [{"value": "5"}]
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = test_client(server.url());
        let response = client.run_report("123456", test_request()).await.unwrap();

        assert_eq!(response.rows.len(), 1);
        assert_eq!(response.rows[0].metric_values[0].value.as_deref(), Some("5"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/properties/123456:runReport")
            .with_status(403)
            .with_body(r#"{"error": {"status": "PERMISSION_DENIED"}}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.run_report("123456", test_request()).await.unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("PERMISSION_DENIED"));
    }

    #[tokio::test]
    async fn test_empty_report_has_no_rows() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/properties/123456:runReport")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let client = test_client(server.url());
        let response = client.run_report("123456", test_request()).await.unwrap();
        assert!(response.rows.is_empty());
    }
}
