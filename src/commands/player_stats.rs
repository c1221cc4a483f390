//! Player stats export command

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    cli::types::{LeagueKey, Season},
    config::{Credentials, Endpoints},
    output::write_csv,
    yahoo::{
        pager::{collect_rows, PlayerPager, SessionPages},
        PlayersQuery, YahooSession,
    },
    Result,
};

use super::{load_stat_schema, open_session, resolve_league_key};

/// Parameters for the player stats command
#[derive(Debug, Clone)]
pub struct PlayerStatsParams {
    pub league_key: Option<LeagueKey>,
    pub season: Season,
    pub position: String,
    pub output: PathBuf,
    pub auth_code: Option<String>,
}

/// What an export run produced.
#[derive(Debug)]
pub struct ExportSummary {
    pub rows: usize,
    pub columns: usize,
    pub requests: u32,
    pub output: PathBuf,
    /// Why pagination stopped early, if it did.
    pub interrupted_by: Option<String>,
}

/// Handle the player stats command: authorize, then export.
pub async fn handle_player_stats(
    params: PlayerStatsParams,
    credentials: &Credentials,
    endpoints: &Endpoints,
) -> Result<ExportSummary> {
    let query = PlayersQuery {
        league_key: resolve_league_key(params.league_key)?,
        season: params.season,
        position: params.position,
    };

    let session = open_session(endpoints, credentials, params.auth_code).await?;
    let summary = export_player_stats(&session, &query, &params.output).await?;

    println!(
        "✓ Wrote {} players ({} columns, {} page requests) to {}",
        summary.rows,
        summary.columns,
        summary.requests,
        summary.output.display()
    );
    if summary.interrupted_by.is_some() {
        println!("  Player list is incomplete: pagination stopped early");
    }

    Ok(summary)
}

/// Export every player page for `query` into a CSV at `output`.
///
/// Failing to load the stat categories is fatal. A failure while paging only
/// ends pagination early: it is reported and the rows gathered so far are
/// still written.
pub async fn export_player_stats(
    session: &YahooSession,
    query: &PlayersQuery,
    output: &Path,
) -> Result<ExportSummary> {
    let schema = load_stat_schema(session, &query.league_key).await?;

    let pager = PlayerPager::new(SessionPages::new(session, query), &schema);
    let harvest = collect_rows(pager).await;

    let interrupted_by = harvest.error.as_ref().map(|e| e.to_string());
    if let Some(err) = &interrupted_by {
        warn!(rows = harvest.rows.len(), "player pagination aborted");
        println!("{err}");
    }

    write_csv(output, &schema, &harvest.rows)?;
    info!(rows = harvest.rows.len(), path = %output.display(), "wrote player stats");

    Ok(ExportSummary {
        rows: harvest.rows.len(),
        columns: 3 + schema.len(),
        requests: harvest.requests,
        output: output.to_path_buf(),
        interrupted_by,
    })
}
