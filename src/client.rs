use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::auth::{Credential, TokenSource};
use crate::config::Config;
use crate::types::{GetReportsRequest, GetReportsResponse};

/// API errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication failed. Check your client credentials and tokens.")]
    AuthenticationError,

    #[error("Resource not found: {0}")]
    NotFoundError(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimitError,

    #[error("Request timeout")]
    TimeoutError,

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Analytics Reporting API client
pub struct ReportingClient {
    client: Client,
    api_url: String,
    tokens: TokenSource,
}

impl ReportingClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        // Transport defaults only; no timeout is configured here.
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        let credential = Credential::from_config(config);
        let tokens = TokenSource::new(client.clone(), config.token_url.clone(), credential);

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            tokens,
        })
    }

    /// Submit one batch report query and return the typed response.
    ///
    /// The bearer token comes from the token source, which performs the
    /// refresh-token grant on first use.
    pub async fn batch_get(&self, request: &GetReportsRequest) -> Result<GetReportsResponse> {
        let url = format!("{}/v4/reports:batchGet", self.api_url);

        let token = self.tokens.access_token().await?;

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::TimeoutError
                } else {
                    ApiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();

        match status {
            StatusCode::OK => {
                let body = response
                    .json::<GetReportsResponse>()
                    .await
                    .context("Failed to parse response")?;
                Ok(body)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ApiError::AuthenticationError.into())
            }
            StatusCode::NOT_FOUND => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::NotFoundError(message).into())
            }
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimitError.into()),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::ApiError {
                    status: status.as_u16(),
                    message,
                }
                .into())
            }
        }
    }
}
