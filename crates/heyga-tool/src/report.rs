//! Report-fetch boundary
//!
//! Issues one `runReport` request with a fixed set of dimensions and one
//! metric, then maps the positional response values into typed rows. No
//! grouping happens here; the output goes straight to the aggregator.

use crate::aggregate::AnalyticsRow;
use heyga_core::Result;
use heyga_ga4::{DateRange, Dimension, Metric, ReportClient, ReportRow, RunReportRequest};
use tracing::debug;

/// Dimensions requested for every report, in positional order.
pub const DIMENSIONS: [&str; 6] = [
    "fullPageUrl",
    "pageTitle",
    "pageReferrer",
    "city",
    "country",
    "browser",
];

/// The one metric requested, reported as "views".
pub const METRIC: &str = "totalUsers";

/// Fetch per-row pageview data for `[start_date, today]`.
///
/// `start_date` must already be normalized (see [`crate::range`]).
pub async fn fetch_pageviews(
    client: &dyn ReportClient,
    property_id: &str,
    start_date: &str,
) -> Result<Vec<AnalyticsRow>> {
    let request = RunReportRequest {
        date_ranges: vec![DateRange {
            start_date: start_date.to_string(),
            end_date: "today".to_string(),
        }],
        dimensions: DIMENSIONS.iter().copied().map(Dimension::new).collect(),
        metrics: vec![Metric::new(METRIC)],
    };

    let response = client.run_report(property_id, request).await?;
    debug!(rows = response.rows.len(), "mapped GA4 report response");

    Ok(response.rows.into_iter().map(row_from_report).collect())
}

/// Positional mapping into the row shape.
///
/// Missing dimension values become empty strings; the metric value is
/// parsed from its string form, with anything unparsable coerced to 0 so
/// the aggregator only ever sees valid numbers.
fn row_from_report(row: ReportRow) -> AnalyticsRow {
    let dimension = |index: usize| -> String {
        row.dimension_values
            .get(index)
            .and_then(|v| v.value.clone())
            .unwrap_or_default()
    };

    let views = row
        .metric_values
        .first()
        .and_then(|v| v.value.as_deref())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    AnalyticsRow {
        url: dimension(0),
        title: dimension(1),
        referrer: dimension(2),
        city: dimension(3),
        country: dimension(4),
        browser: dimension(5),
        views,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use heyga_ga4::{ReportValue, RunReportResponse};
    use std::sync::Mutex;

    fn value(s: &str) -> ReportValue {
        ReportValue {
            value: Some(s.to_string()),
        }
    }

    #[test]
    fn test_positional_mapping() {
        let row = ReportRow {
            dimension_values: vec![
                value("/a"),
                value("Home"),
                value("google.com"),
                value("Lisbon"),
                value("Portugal"),
                value("Firefox"),
            ],
            metric_values: vec![value("42")],
        };

        let mapped = row_from_report(row);
        assert_eq!(mapped.url, "/a");
        assert_eq!(mapped.title, "Home");
        assert_eq!(mapped.referrer, "google.com");
        assert_eq!(mapped.city, "Lisbon");
        assert_eq!(mapped.country, "Portugal");
        assert_eq!(mapped.browser, "Firefox");
        assert_eq!(mapped.views, 42);
    }

    #[test]
    fn test_missing_values_default() {
        let row = ReportRow {
            dimension_values: vec![value("/a")],
            metric_values: vec![],
        };

        let mapped = row_from_report(row);
        assert_eq!(mapped.url, "/a");
        assert_eq!(mapped.title, "");
        assert_eq!(mapped.browser, "");
        assert_eq!(mapped.views, 0);
    }

    #[test]
    fn test_non_numeric_metric_coerces_to_zero() {
        let row = ReportRow {
            dimension_values: vec![],
            metric_values: vec![value("(not set)")],
        };

        assert_eq!(row_from_report(row).views, 0);
    }

    struct RecordingClient {
        last_request: Mutex<Option<(String, RunReportRequest)>>,
        response: RunReportResponse,
    }

    #[async_trait]
    impl ReportClient for RecordingClient {
        async fn run_report(
            &self,
            property_id: &str,
            request: RunReportRequest,
        ) -> heyga_core::Result<RunReportResponse> {
            *self.last_request.lock().unwrap() = Some((property_id.to_string(), request));
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn test_fetch_requests_fixed_dimensions_and_metric() {
        let client = RecordingClient {
            last_request: Mutex::new(None),
            response: RunReportResponse::default(),
        };

        let rows = fetch_pageviews(&client, "123456", "30daysAgo").await.unwrap();
        assert!(rows.is_empty());

        let (property_id, request) = client.last_request.lock().unwrap().take().unwrap();
        assert_eq!(property_id, "123456");
        assert_eq!(request.date_ranges[0].start_date, "30daysAgo");
        assert_eq!(request.date_ranges[0].end_date, "today");

        let names: Vec<&str> = request.dimensions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, DIMENSIONS.to_vec());
        assert_eq!(request.metrics.len(), 1);
        assert_eq!(request.metrics[0].name, METRIC);
    }
}
