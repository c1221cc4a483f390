//! ID types for Yahoo Fantasy leagues.

use crate::error::{Result, YahooError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Yahoo Fantasy league keys.
///
/// A league key combines the game code (or game id) with the league id,
/// e.g. `nhl.l.60602`. Every settings and players request is scoped by it.
///
/// # Examples
///
/// ```rust
/// use yahoo_fantasy::LeagueKey;
///
/// let key: LeagueKey = "nhl.l.60602".parse().unwrap();
/// assert_eq!(key.game(), "nhl");
/// assert_eq!(key.league_id(), "60602");
/// assert_eq!(key.to_string(), "nhl.l.60602");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueKey(String);

impl LeagueKey {
    /// Get the key as it appears in API paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Game code or numeric game id (the part before `.l.`).
    pub fn game(&self) -> &str {
        self.0.split_once(".l.").map(|(g, _)| g).unwrap_or_default()
    }

    /// League id within the game (the part after `.l.`).
    pub fn league_id(&self) -> &str {
        self.0.split_once(".l.").map(|(_, id)| id).unwrap_or_default()
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueKey {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let valid = match s.split_once(".l.") {
            Some((game, id)) => {
                !game.is_empty()
                    && game.chars().all(|c| c.is_ascii_alphanumeric())
                    && !id.is_empty()
                    && id.chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        };

        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(YahooError::InvalidLeagueKey { key: s.to_string() })
        }
    }
}
