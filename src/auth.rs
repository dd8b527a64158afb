//! OAuth2 refresh-token authentication for the reporting API.

use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::Config;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Token request failed with status {status}: {body}")]
    TokenRequestFailed { status: StatusCode, body: String },

    #[error("Token parse error: {0}")]
    TokenParse(String),
}

/// Token endpoint response for a refresh-token grant
#[derive(Debug, Deserialize)]
struct RefreshTokenResponse {
    access_token: String,
    expires_in: i64,
    #[allow(dead_code)]
    #[serde(default)]
    token_type: String,
    #[allow(dead_code)]
    #[serde(default)]
    scope: String,
}

/// OAuth2 credential with expiration tracking.
#[derive(Debug, Clone)]
pub struct Credential {
    pub client_id: String,
    pub client_secret: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// Build a credential from resolved configuration.
    ///
    /// Expiry is pinned to construction time, so the first use treats the
    /// supplied access token as stale and exchanges the refresh token.
    pub fn from_config(config: &Config) -> Self {
        Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            access_token: config.access_token.clone(),
            refresh_token: config.refresh_token.clone(),
            expires_at: Utc::now(),
        }
    }

    fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Hands out bearer tokens, refreshing through the token endpoint on expiry.
pub struct TokenSource {
    http_client: Client,
    token_url: String,
    credential: RwLock<Credential>,
}

impl TokenSource {
    pub fn new(http_client: Client, token_url: String, credential: Credential) -> Self {
        Self {
            http_client,
            token_url,
            credential: RwLock::new(credential),
        }
    }

    /// Get a valid access token, refreshing if necessary.
    pub async fn access_token(&self) -> Result<String, AuthError> {
        {
            let credential = self.credential.read().await;
            if !credential.is_expired() {
                return Ok(credential.access_token.clone());
            }
        }

        self.refresh().await
    }

    /// Exchange the refresh token for a fresh access token and cache it.
    async fn refresh(&self) -> Result<String, AuthError> {
        let mut credential = self.credential.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if !credential.is_expired() {
            return Ok(credential.access_token.clone());
        }

        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", credential.client_id.as_str()),
            ("client_secret", credential.client_secret.as_str()),
            ("refresh_token", credential.refresh_token.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenRequestFailed { status, body });
        }

        let token: RefreshTokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::TokenParse(format!("Failed to parse token response: {}", e)))?;

        credential.access_token = token.access_token.clone();
        credential.expires_at = Utc::now() + Duration::seconds(token.expires_in);

        Ok(token.access_token)
    }
}
