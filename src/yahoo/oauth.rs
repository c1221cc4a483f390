//! OAuth2 authorization-code flow against Yahoo's login endpoints.
//!
//! Yahoo apps registered for installed use get the code "out of band": the
//! user signs in through a browser, Yahoo shows the code, and the user pastes
//! it back. How the code is obtained is left to an [`AuthCodeProvider`].

use std::io::{self, BufRead, Write};

use reqwest::{header::LOCATION, redirect::Policy, Client};
use tracing::{debug, info, warn};

use crate::config::{Credentials, Endpoints};
use crate::error::{Result, YahooError};
use crate::yahoo::types::{BearerToken, TokenResponse};

/// Out-of-band redirect: Yahoo displays the code instead of redirecting.
pub const OOB_REDIRECT: &str = "oob";


/// Source of the authorization code once the user has been sent to the
/// login page.
pub trait AuthCodeProvider {
    fn authorization_code(&self, login_url: &str) -> Result<String>;
}

/// Opens the login page in the system browser and reads the code from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleCodeProvider;

impl AuthCodeProvider for ConsoleCodeProvider {
    fn authorization_code(&self, login_url: &str) -> Result<String> {
        if let Err(e) = webbrowser::open(login_url) {
            warn!(error = %e, "could not launch a browser");
            println!("Open this URL in your browser to authorize:\n{login_url}");
        }

        print!("Input code from browser: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Returns a code known up front, e.g. from `--auth-code`.
#[derive(Debug, Clone)]
pub struct StaticCodeProvider(String);

impl StaticCodeProvider {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl AuthCodeProvider for StaticCodeProvider {
    fn authorization_code(&self, _login_url: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Authorization-code exchange for one registered app.
#[derive(Debug)]
pub struct OAuthFlow<'a> {
    client: Client,
    endpoints: &'a Endpoints,
    credentials: &'a Credentials,
}

impl<'a> OAuthFlow<'a> {
    pub fn new(endpoints: &'a Endpoints, credentials: &'a Credentials) -> Result<Self> {
        // The login page location is read from the redirect itself.
        let client = Client::builder().redirect(Policy::none()).build()?;
        Ok(Self {
            client,
            endpoints,
            credentials,
        })
    }

    /// `request_auth` URL carrying the client id and out-of-band redirect.
    pub fn authorization_url(&self) -> Result<String> {
        let request = self
            .client
            .get(self.endpoints.authorize_url())
            .query(&[
                ("client_id", self.credentials.client_id()),
                ("redirect_uri", OOB_REDIRECT),
                ("response_type", "code"),
                ("language", "en-us"),
            ])
            .build()?;
        Ok(request.url().to_string())
    }

    /// Resolve the page the user has to visit to grant access.
    ///
    /// `request_auth` answers with a redirect to the sign-in page; a 2xx
    /// answer without `Location` is the sign-in page itself.
    pub async fn login_page_url(&self) -> Result<String> {
        let url = self.authorization_url()?;
        let res = self.client.get(&url).send().await?;
        let status = res.status();

        if !status.is_success() && !status.is_redirection() {
            return Err(YahooError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        match res.headers().get(LOCATION) {
            Some(location) => {
                let location = location.to_str().map_err(|e| YahooError::Authorization {
                    message: format!("unreadable Location header: {e}"),
                })?;
                let target = res
                    .url()
                    .join(location)
                    .map_err(|e| YahooError::Authorization {
                        message: format!("invalid Location header {location:?}: {e}"),
                    })?;
                Ok(target.to_string())
            }
            None if status.is_success() => Ok(url),
            None => Err(YahooError::Authorization {
                message: format!("redirect {status} without a Location header"),
            }),
        }
    }

    /// Trade an authorization code for tokens at `get_token`.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        let code = code.trim();
        if code.is_empty() {
            return Err(YahooError::EmptyAuthCode);
        }

        let body = self
            .client
            .post(self.endpoints.token_url())
            .basic_auth(
                self.credentials.client_id(),
                Some(self.credentials.client_secret()),
            )
            .form(&[
                ("redirect_uri", OOB_REDIRECT),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Run the whole flow: find the login page, obtain a code, exchange it.
    pub async fn authorize(&self, provider: &dyn AuthCodeProvider) -> Result<BearerToken> {
        let login_url = self.login_page_url().await?;
        debug!(login_url = %login_url, "resolved login page");

        let code = provider.authorization_code(&login_url)?;
        let token = self.exchange_code(&code).await?;

        info!(
            token_type = token.token_type.as_deref().unwrap_or("bearer"),
            expires_in = ?token.expires_in,
            "obtained access token"
        );
        Ok(BearerToken::new(token.access_token))
    }
}
