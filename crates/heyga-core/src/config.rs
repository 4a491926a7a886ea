//! Environment configuration
//!
//! The hosting runtime owns persistent configuration, so this crate only
//! reads the two environment variables the GA4 integration needs.

use crate::{Error, Result};
use std::env;

/// Environment variable holding the GA4 property identifier.
pub const ENV_PROPERTY_ID: &str = "GA4_PROPERTY_ID";

/// Environment variable holding the base64-encoded service-account JSON.
pub const ENV_CREDENTIALS_BASE64: &str = "GOOGLE_APPLICATION_CREDENTIALS_BASE64";

/// GA4 integration configuration
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Numeric GA4 property id, used to scope report requests
    pub property_id: String,

    /// Base64-encoded JSON service-account credential blob
    pub credentials_base64: String,
}

impl GaConfig {
    /// Load configuration from the environment.
    ///
    /// Both variables are required; a missing or empty value is a
    /// configuration error naming the variable.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            property_id: require_env(ENV_PROPERTY_ID)?,
            credentials_base64: require_env(ENV_CREDENTIALS_BASE64)?,
        };
        tracing::debug!(property_id = %config.property_id, "loaded GA4 configuration");
        Ok(config)
    }

    /// Create test-friendly defaults (no environment required)
    pub fn test_defaults() -> Self {
        Self {
            property_id: "123456789".to_string(),
            credentials_base64: String::new(),
        }
    }
}

fn require_env(name: &str) -> Result<String> {
    let value =
        env::var(name).map_err(|_| Error::config_error(format!("{name} is not set")))?;
    if value.trim().is_empty() {
        return Err(Error::config_error(format!("{name} is empty")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_is_config_error() {
        unsafe {
            env::remove_var("HEYGA_TEST_MISSING");
        }

        let err = require_env("HEYGA_TEST_MISSING").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("HEYGA_TEST_MISSING"));
    }

    #[test]
    fn test_empty_env_is_config_error() {
        unsafe {
            env::set_var("HEYGA_TEST_EMPTY", "   ");
        }

        let err = require_env("HEYGA_TEST_EMPTY").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        unsafe {
            env::remove_var("HEYGA_TEST_EMPTY");
        }
    }

    #[test]
    fn test_present_env_is_returned() {
        unsafe {
            env::set_var("HEYGA_TEST_PRESENT", "value");
        }

        assert_eq!(require_env("HEYGA_TEST_PRESENT").unwrap(), "value");

        unsafe {
            env::remove_var("HEYGA_TEST_PRESENT");
        }
    }

    #[test]
    fn test_defaults() {
        let config = GaConfig::test_defaults();
        assert_eq!(config.property_id, "123456789");
    }
}
