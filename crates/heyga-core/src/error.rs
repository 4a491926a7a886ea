use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The range expression matched neither the relative nor the
    /// absolute grammar. Carries the original input for diagnostics.
    #[error("Invalid date format: {0}")]
    InvalidRange(String),

    /// An invocation argument had the wrong JSON type.
    #[error("Expected {field} to be a {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The analytics service rejected or failed the report request.
    #[error("Analytics service error: {0}")]
    Upstream(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use heyga_core::Error;
    /// let err = Error::config_error("GA4_PROPERTY_ID is not set");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for creating authentication errors
    ///
    /// # Example
    /// ```
    /// use heyga_core::Error;
    /// let err = Error::auth_error("token exchange failed");
    /// ```
    pub fn auth_error(msg: impl Into<String>) -> Self {
        Error::Auth(msg.into())
    }

    /// Helper for creating upstream service errors
    pub fn upstream(msg: impl Into<String>) -> Self {
        Error::Upstream(msg.into())
    }

    /// Helper for the type-mismatch boundary check
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Error::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}
