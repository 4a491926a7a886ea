//! GA4 pageviews tool
//!
//! This crate provides the callable tool an agent runtime registers:
//! - Date-range validation and normalization
//! - The row aggregator (group by one dimension, sum views)
//! - The report-fetch boundary over a `ReportClient`
//! - `PageviewsTool`, wiring the above behind the `Tool` trait

pub mod aggregate;
pub mod context;
pub mod pageviews;
pub mod range;
pub mod report;
pub mod schema;

// Re-exports
pub use aggregate::{AnalyticsRow, GroupKey, reduce_rows_by};
pub use context::DefaultToolContext;
pub use pageviews::PageviewsTool;
pub use range::normalize;
pub use report::fetch_pageviews;
pub use schema::{ToolSchema, generate_schema};

// Re-export core types
pub use heyga_core::{Error, Result, Tool, ToolContext, ToolResponse};
