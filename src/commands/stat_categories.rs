//! Stat categories command implementation

use crate::{
    config::{Credentials, Endpoints},
    yahoo::types::StatSchema,
    LeagueKey, Result,
};

use super::{load_stat_schema, open_session, resolve_league_key};

/// Handle the stat categories command
pub async fn handle_stat_categories(
    league_key: Option<LeagueKey>,
    json: bool,
    auth_code: Option<String>,
    credentials: &Credentials,
    endpoints: &Endpoints,
) -> Result<()> {
    let league_key = resolve_league_key(league_key)?;
    let session = open_session(endpoints, credentials, auth_code).await?;
    let schema = load_stat_schema(&session, &league_key).await?;

    println!("{}", render_stat_categories(&schema, json)?);
    Ok(())
}

/// One line per stat (`id<TAB>name<TAB>column`), or a JSON array.
pub fn render_stat_categories(schema: &StatSchema, json: bool) -> Result<String> {
    if json {
        let entries: Vec<serde_json::Value> = schema
            .iter()
            .map(|s| {
                serde_json::json!({
                    "stat_id": s.stat_id,
                    "name": s.name,
                    "column": s.column_name(),
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    Ok(schema
        .iter()
        .map(|s| format!("{}\t{}\t{}", s.stat_id, s.name, s.column_name()))
        .collect::<Vec<_>>()
        .join("\n"))
}
