//! Credentials and endpoint configuration.
//!
//! Everything here is resolved once at startup and then passed by reference
//! into the authorization and fetch stages.

use std::fmt;

use crate::error::{Result, YahooError};

pub const CLIENT_ID_ENV_VAR: &str = "YAHOO_OAUTH_CLIENT_ID";
pub const CLIENT_SECRET_ENV_VAR: &str = "YAHOO_OAUTH_CLIENT_SECRET";

/// Base path for Yahoo's OAuth2 login endpoints.
pub const AUTH_BASE_URL: &str = "https://api.login.yahoo.com/oauth2";

/// Base path for the Yahoo Fantasy Sports v2 API.
pub const API_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

/// OAuth2 client credentials for a registered Yahoo app.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read `YAHOO_OAUTH_CLIENT_ID` and `YAHOO_OAUTH_CLIENT_SECRET`.
    ///
    /// An unset or empty variable is an error.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            required_env(CLIENT_ID_ENV_VAR)?,
            required_env(CLIENT_SECRET_ENV_VAR)?,
        ))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(YahooError::MissingCredential {
            env_var: name.to_string(),
        }),
    }
}

/// Base URLs for the login and fantasy APIs.
///
/// Defaults to the production hosts; tests point both at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth_base: String,
    pub api_base: String,
}

impl Endpoints {
    pub fn new(auth_base: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            auth_base: auth_base.into().trim_end_matches('/').to_string(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn authorize_url(&self) -> String {
        format!("{}/request_auth", self.auth_base)
    }

    pub fn token_url(&self) -> String {
        format!("{}/get_token", self.auth_base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(AUTH_BASE_URL, API_BASE_URL)
    }
}
