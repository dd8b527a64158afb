use std::env;

const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_API_URL: &str = "https://analyticsreporting.googleapis.com";

/// Runtime configuration with resolved values
///
/// Secrets are read once at startup instead of scattered environment
/// lookups, so tests can inject a `Config` pointing at mock endpoints.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_url: String,
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            access_token: String::new(),
            refresh_token: String::new(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// Missing variables resolve to empty strings; nothing is validated
    /// here, so bad credentials surface at the remote call.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("CLIENT_SECRET").unwrap_or_default(),
            access_token: env::var("ACCESS_TOKEN").unwrap_or_default(),
            refresh_token: env::var("REFRESH_TOKEN").unwrap_or_default(),
            ..Self::default()
        }
    }
}
