//! Offset pagination over the league players listing.
//!
//! [`PlayerPager`] yields one flattened page at a time and ends at the first
//! empty page or the first error; [`collect_rows`] drains it and keeps
//! whatever was gathered before an error.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Result, YahooError};
use crate::yahoo::http::{PlayersQuery, YahooSession, PAGE_SIZE};
use crate::yahoo::types::StatSchema;
use crate::yahoo::xml::parse_player_rows;

/// Pause between consecutive page requests.
pub const PAGE_DELAY: Duration = Duration::from_secs(1);

#[cfg(test)]
mod tests;

/// Where raw players pages come from.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetch the XML page whose first player is at offset `start`.
    async fn fetch_page(&self, start: u32) -> Result<String>;
}

/// Players pages fetched through an authenticated session.
#[derive(Debug, Clone, Copy)]
pub struct SessionPages<'a> {
    session: &'a YahooSession,
    query: &'a PlayersQuery,
}

impl<'a> SessionPages<'a> {
    pub fn new(session: &'a YahooSession, query: &'a PlayersQuery) -> Self {
        Self { session, query }
    }
}

impl PageSource for SessionPages<'_> {
    async fn fetch_page(&self, start: u32) -> Result<String> {
        self.session.get_players_page(self.query, start).await
    }
}

/// Walks the players listing 25 at a time, flattening each page into rows.
pub struct PlayerPager<'a, S> {
    source: S,
    schema: &'a StatSchema,
    start: u32,
    requests: u32,
    finished: bool,
}

impl<'a, S: PageSource> PlayerPager<'a, S> {
    pub fn new(source: S, schema: &'a StatSchema) -> Self {
        Self {
            source,
            schema,
            start: 0,
            requests: 0,
            finished: false,
        }
    }

    /// Offset of the next page to request.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Pages requested so far, including a final empty or failed one.
    pub fn requests(&self) -> u32 {
        self.requests
    }

    /// Fetch and flatten the next page.
    ///
    /// Returns `None` once a page comes back without players or after an
    /// error has been yielded. An empty page is never requested twice.
    pub async fn next_page(&mut self) -> Option<Result<Vec<String>>> {
        if self.finished {
            return None;
        }

        if self.requests > 0 {
            tokio::time::sleep(PAGE_DELAY).await;
        }

        let page = match self.source.fetch_page(self.start).await {
            Ok(xml) => parse_player_rows(&xml, self.schema),
            Err(e) => Err(e),
        };
        self.requests += 1;

        match page {
            Ok(rows) if rows.is_empty() => {
                debug!(start = self.start, "empty players page, done");
                self.finished = true;
                None
            }
            Ok(rows) => {
                self.start += PAGE_SIZE;
                Some(Ok(rows))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Everything gathered from a pagination run.
#[derive(Debug, Default)]
pub struct Harvest {
    pub rows: Vec<String>,
    /// Number of page requests issued.
    pub requests: u32,
    /// The error that cut pagination short, if any.
    pub error: Option<YahooError>,
}

impl Harvest {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Drain `pager`, keeping rows gathered before the first error.
pub async fn collect_rows<S: PageSource>(mut pager: PlayerPager<'_, S>) -> Harvest {
    let mut harvest = Harvest::default();

    while let Some(page) = pager.next_page().await {
        match page {
            Ok(rows) => {
                info!(
                    start = pager.start() - PAGE_SIZE,
                    players = rows.len(),
                    "fetched players page"
                );
                harvest.rows.extend(rows);
            }
            Err(e) => {
                harvest.error = Some(e);
                break;
            }
        }
    }

    harvest.requests = pager.requests();
    harvest
}
