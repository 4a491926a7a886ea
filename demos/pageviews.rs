//! Standalone harness for the pageviews tool.
//!
//! Requires GA4_PROPERTY_ID and GOOGLE_APPLICATION_CREDENTIALS_BASE64 in
//! the environment (or a .env file). Usage:
//!
//! ```bash
//! cargo run --example pageviews -- 30daysAgo
//! cargo run --example pageviews -- 2024-06-01 country
//! ```

use heyga_core::Tool;
use heyga_tool::{DefaultToolContext, PageviewsTool};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let range = args.next().unwrap_or_else(|| "30daysAgo".to_string());
    let key = args.next();

    let tool = PageviewsTool::from_env()?;

    let mut params = serde_json::json!({ "range": range });
    if let Some(key) = key {
        params["key"] = serde_json::Value::String(key);
    }

    let ctx = Arc::new(DefaultToolContext::generate());
    let response = tool.execute(ctx, params).await?;

    println!("{}", serde_json::to_string_pretty(&response.result)?);
    Ok(())
}
