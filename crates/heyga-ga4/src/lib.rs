//! GA4 Data API client for the heyga workspace
//!
//! This crate covers the external-service boundary: decoding the
//! service-account credential blob, exchanging it for a bearer token,
//! and issuing `runReport` requests. The `ReportClient` trait is the
//! capability injected into the pageviews tool, so tests and embedders
//! can substitute a double without touching the network.

pub mod auth;
pub mod client;
pub mod credentials;
pub mod types;

// Re-exports
pub use auth::GaAuth;
pub use client::{DataApiClient, ReportClient};
pub use credentials::{ServiceAccountKey, decode_credentials};
pub use types::{
    DateRange, Dimension, Metric, ReportRow, ReportValue, RunReportRequest, RunReportResponse,
};

// Re-export core types
pub use heyga_core::{Error, Result};
