use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tracing::debug;

use crate::cli::types::{LeagueKey, Season};
use crate::config::Endpoints;
use crate::yahoo::types::BearerToken;
use crate::Result;

/// Number of players Yahoo returns per page.
pub const PAGE_SIZE: u32 = 25;

/// Overall rank, best first.
const PLAYERS_SORT: &str = "sort=OR;sdir=1";
const PLAYERS_STATUS: &str = "ALL";


/// An authenticated fantasy API session.
///
/// Holds the HTTP client, the API base and the bearer token for the life of
/// the process; every fetch goes through it.
#[derive(Debug, Clone)]
pub struct YahooSession {
    client: Client,
    api_base: String,
    token: BearerToken,
}

impl YahooSession {
    pub fn new(client: Client, endpoints: &Endpoints, token: BearerToken) -> Self {
        Self {
            client,
            api_base: endpoints.api_base.clone(),
            token,
        }
    }

    /// Session against the production API.
    pub fn production(token: BearerToken) -> Self {
        Self::new(Client::new(), &Endpoints::default(), token)
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/xml"));
        let bearer = format!("Bearer {}", self.token.secret());
        h.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
        Ok(h)
    }

    /// GET an API URL with the bearer token and return the body text.
    ///
    /// Any non-2xx status is an error.
    async fn get_xml(&self, url: &str) -> Result<String> {
        debug!(url, "GET");

        let body = self
            .client
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }

    pub fn settings_url(&self, league_key: &LeagueKey) -> String {
        format!("{}/league/{}/settings", self.api_base, league_key)
    }

    /// Fetch the raw `settings` document for a league.
    pub async fn get_league_settings(&self, league_key: &LeagueKey) -> Result<String> {
        self.get_xml(&self.settings_url(league_key)).await
    }

    pub fn players_url(&self, query: &PlayersQuery, start: u32) -> String {
        format!(
            "{}/league/{}/players;{PLAYERS_SORT};status={PLAYERS_STATUS};pos={};count={PAGE_SIZE};start={}/stats;type=season;season={}",
            self.api_base, query.league_key, query.position, start, query.season
        )
    }

    /// Fetch one page of players with season stats, starting at offset `start`.
    pub async fn get_players_page(&self, query: &PlayersQuery, start: u32) -> Result<String> {
        self.get_xml(&self.players_url(query, start)).await
    }
}

/// Which players listing to page through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayersQuery {
    pub league_key: LeagueKey,
    pub season: Season,
    /// Yahoo position filter, e.g. `P` (all skaters) or `G`.
    pub position: String,
}
