//! Command implementations for the Yahoo Fantasy CLI

pub mod player_stats;
pub mod stat_categories;

use reqwest::Client;
use tracing::info;

use crate::{
    config::{Credentials, Endpoints},
    yahoo::{
        oauth::{AuthCodeProvider, ConsoleCodeProvider, OAuthFlow, StaticCodeProvider},
        types::StatSchema,
        xml::parse_stat_schema,
        YahooSession,
    },
    LeagueKey, Result, DEFAULT_LEAGUE_KEY, LEAGUE_KEY_ENV_VAR,
};

/// Resolve the league key from the argument, then `YAHOO_FANTASY_LEAGUE_KEY`,
/// then the built-in default league.
pub fn resolve_league_key(league_key: Option<LeagueKey>) -> Result<LeagueKey> {
    if let Some(key) = league_key {
        return Ok(key);
    }

    match std::env::var(LEAGUE_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => key.parse(),
        _ => DEFAULT_LEAGUE_KEY.parse(),
    }
}

/// Pick the code provider: a fixed code when one was given, else the console.
pub fn code_provider(auth_code: Option<String>) -> Box<dyn AuthCodeProvider> {
    match auth_code {
        Some(code) => Box::new(StaticCodeProvider::new(code)),
        None => Box::new(ConsoleCodeProvider),
    }
}

/// Run the authorization-code flow and open an API session with the token.
pub async fn open_session(
    endpoints: &Endpoints,
    credentials: &Credentials,
    auth_code: Option<String>,
) -> Result<YahooSession> {
    let flow = OAuthFlow::new(endpoints, credentials)?;
    let token = flow.authorize(code_provider(auth_code).as_ref()).await?;

    Ok(YahooSession::new(Client::new(), endpoints, token))
}

/// Fetch a league's settings and read its stat categories.
pub async fn load_stat_schema(session: &YahooSession, league_key: &LeagueKey) -> Result<StatSchema> {
    let xml = session.get_league_settings(league_key).await?;
    let schema = parse_stat_schema(&xml)?;

    info!(league = %league_key, stats = schema.len(), "loaded stat categories");
    Ok(schema)
}

#[cfg(test)]
mod tests;
