use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests;

/// One stat category from the league settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDefinition {
    pub name: String,
    pub stat_id: String,
}

impl StatDefinition {
    pub fn new(name: impl Into<String>, stat_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stat_id: stat_id.into(),
        }
    }

    /// CSV column name: lower-cased, spaces replaced by underscores.
    pub fn column_name(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }
}

/// Ordered stat categories keyed by display name.
///
/// Order is the order names were first seen. Inserting a name again replaces
/// its id but keeps its position, so a league that repeats a display name ends
/// up with one column carrying the last id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatSchema {
    stats: Vec<StatDefinition>,
}

impl StatSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, stat_id: impl Into<String>) {
        let name = name.into();
        let stat_id = stat_id.into();
        match self.stats.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.stat_id = stat_id,
            None => self.stats.push(StatDefinition { name, stat_id }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.stats
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.stat_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatDefinition> {
        self.stats.iter()
    }

    pub fn stat_ids(&self) -> impl Iterator<Item = &str> {
        self.stats.iter().map(|s| s.stat_id.as_str())
    }
}

impl<N: Into<String>, I: Into<String>> FromIterator<(N, I)> for StatSchema {
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut schema = StatSchema::new();
        for (name, id) in iter {
            schema.insert(name, id);
        }
        schema
    }
}

/// OAuth2 access token attached to every fantasy API request.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Body of a successful `get_token` exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub xoauth_yahoo_guid: Option<String>,
}
