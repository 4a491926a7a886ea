//! Core traits and types for the heyga workspace
//!
//! This crate provides the foundational abstractions shared by the GA4
//! client and the pageviews tool: the error taxonomy, the `Tool` seam
//! consumed by agent runtimes, and environment configuration.

pub mod config;
pub mod context;
pub mod error;
pub mod traits;

// Re-exports
pub use config::GaConfig;
pub use context::ToolContext;
pub use error::{Error, Result};
pub use traits::{Tool, ToolResponse};
