//! The pageviews tool
//!
//! `PageviewsTool` is the operation an agent runtime registers: given a
//! date range and an optional grouping dimension, it fetches GA4
//! pageview rows and returns them grouped with views summed. One network
//! call per invocation, no retries, no partial results.

use crate::aggregate::{AnalyticsRow, GroupKey, reduce_rows_by};
use crate::range::normalize;
use crate::report::fetch_pageviews;
use crate::schema::{ToolSchema, generate_schema};
use async_trait::async_trait;
use heyga_core::{Error, GaConfig, Result, Tool, ToolContext, ToolResponse};
use heyga_ga4::{DataApiClient, ReportClient};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub struct PageviewsTool {
    name: String,
    description: String,
    property_id: String,
    client: Arc<dyn ReportClient>,
}

impl PageviewsTool {
    /// Create a tool over an injected report client.
    pub fn new(property_id: impl Into<String>, client: Arc<dyn ReportClient>) -> Self {
        Self {
            name: "get_analytics".to_string(),
            description: "Get page views from Google Analytics for a date range, grouped by a \
                          chosen dimension (url, title, referrer, city or country) with view \
                          counts summed per group."
                .to_string(),
            property_id: property_id.into(),
            client,
        }
    }

    /// Create a tool from environment configuration: property id and
    /// base64-encoded service-account credentials.
    pub fn from_env() -> Result<Self> {
        let config = GaConfig::from_env()?;
        let client = DataApiClient::from_base64(&config.credentials_base64)?;
        Ok(Self::new(config.property_id, Arc::new(client)))
    }

    /// JSON schema of the result rows, for runtimes that validate
    /// tool output.
    pub fn output_schema() -> Value {
        generate_schema::<Vec<AnalyticsRow>>()
    }

    fn parse_range<'a>(params: &'a Value) -> Result<&'a str> {
        match params.get("range") {
            Some(Value::String(range)) => Ok(range),
            Some(other) => Err(Error::type_mismatch(
                "range",
                "string",
                json_type_name(other),
            )),
            None => Err(Error::type_mismatch("range", "string", "null")),
        }
    }

    fn parse_key(params: &Value) -> Result<GroupKey> {
        match params.get("key") {
            None | Some(Value::Null) => Ok(GroupKey::Url),
            Some(Value::String(key)) => key.parse(),
            Some(other) => Err(Error::type_mismatch("key", "string", json_type_name(other))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl Tool for PageviewsTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        let key_names: Vec<&str> = GroupKey::ALL.iter().map(GroupKey::as_str).collect();

        ToolSchema::new()
            .property(
                "range",
                "string",
                "Start date for the query: either YYYY-MM-DD or a relative form like 30daysAgo",
            )
            .string_enum(
                "key",
                &key_names,
                "Dimension to group page views by (default: url)",
            )
            .required("range")
            .build()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> Result<ToolResponse> {
        let range = Self::parse_range(&params)?;
        let key = Self::parse_key(&params)?;

        let start_date = normalize(range)?;

        debug!(
            invocation_id = %ctx.invocation_id(),
            range = %start_date,
            key = %key,
            "fetching pageviews report"
        );

        let rows = fetch_pageviews(self.client.as_ref(), &self.property_id, &start_date).await?;
        let grouped = reduce_rows_by(&rows, key);

        debug!(input_rows = rows.len(), groups = grouped.len(), "aggregated report");

        Ok(ToolResponse {
            result: serde_json::to_value(grouped)?,
        })
    }
}
