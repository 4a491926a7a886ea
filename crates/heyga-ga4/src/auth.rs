//! GA4 authentication strategies

use crate::credentials::ServiceAccountKey;
use heyga_core::{Error, Result};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

const SCOPE: &str = "https://www.googleapis.com/auth/analytics.readonly";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Authentication method for the GA4 Data API
#[derive(Clone, Debug)]
pub enum GaAuth {
    /// Service-account key, exchanged for a bearer token per invocation
    ServiceAccount(ServiceAccountKey),
    /// Pre-issued bearer token (useful for tests and embedders that
    /// manage their own token lifecycle)
    BearerToken(String),
}

impl GaAuth {
    /// Resolve this auth method into a bearer access token.
    pub async fn access_token(&self, client: &reqwest::Client) -> Result<String> {
        match self {
            GaAuth::ServiceAccount(key) => fetch_access_token(client, key).await,
            GaAuth::BearerToken(token) => Ok(token.clone()),
        }
    }
}

/// JWT claims for the service-account assertion
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange a service-account key for an OAuth2 access token.
///
/// Signs an RS256 assertion with the key's private key and posts it to
/// the key's token endpoint. No caching: the tool constructs its client
/// per invocation and a fresh token is fetched each time.
pub async fn fetch_access_token(
    client: &reqwest::Client,
    key: &ServiceAccountKey,
) -> Result<String> {
    let assertion = sign_assertion(key)?;
    exchange_assertion(client, &key.token_uri, &assertion).await
}

fn sign_assertion(key: &ServiceAccountKey) -> Result<String> {
    let now = chrono::Utc::now().timestamp();
    let claims = AssertionClaims {
        iss: &key.client_email,
        scope: SCOPE,
        aud: &key.token_uri,
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| Error::auth_error(format!("invalid service-account private key: {e}")))?;

    jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .map_err(|e| Error::auth_error(format!("failed to sign assertion: {e}")))
}

async fn exchange_assertion(
    client: &reqwest::Client,
    token_uri: &str,
    assertion: &str,
) -> Result<String> {
    tracing::debug!(token_uri = %token_uri, "exchanging service-account assertion");

    let response = client
        .post(token_uri)
        .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(Error::auth_error(format!(
            "token exchange failed ({status}): {body}"
        )));
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}
