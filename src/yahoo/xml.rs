//! Flattening of Yahoo Fantasy XML responses.
//!
//! Every element of interest lives in the fantasy v2 namespace. Lookups follow
//! a slash-separated path of child names and never fail on a missing node:
//! absent elements read as the empty string.

use roxmltree::{Document, Node};

use crate::yahoo::types::StatSchema;
use crate::Result;

/// Namespace of every element in a fantasy v2 response.
pub const YAHOO_NS: &str = "http://fantasysports.yahooapis.com/fantasy/v2/base.rng";

const STATS_PATH: &[&str] = &["league", "settings", "stat_categories", "stats", "stat"];
const PLAYERS_PATH: &[&str] = &["league", "players", "player"];
const PLAYER_STAT_PATH: &[&str] = &["player_stats", "stats", "stat"];

/// Fixed leading columns of every row, in header order.
const PLAYER_FIELD_PATHS: [&[&str]; 3] = [
    &["name", "full"],
    &["editorial_team_full_name"],
    &["display_position"],
];

/// Yahoo's placeholder for "not applicable".
const NOT_APPLICABLE: &str = "-";


/// All descendants reached by following `path`, in document order.
fn find_all<'a, 'input>(node: Node<'a, 'input>, path: &[&str]) -> Vec<Node<'a, 'input>> {
    let mut current = vec![node];
    for &name in path {
        current = current
            .into_iter()
            .flat_map(|n| n.children().filter(move |c| c.has_tag_name((YAHOO_NS, name))))
            .collect();
    }
    current
}

/// Text of the first node at `path`, or `""` when the node or its text is absent.
pub fn safe_find<'a>(node: Node<'a, '_>, path: &[&str]) -> &'a str {
    find_all(node, path)
        .first()
        .and_then(|n| n.text())
        .unwrap_or_default()
}

/// Build the ordered stat schema from a league `settings` response.
pub fn parse_stat_schema(xml: &str) -> Result<StatSchema> {
    let doc = Document::parse(xml)?;

    let schema = find_all(doc.root_element(), STATS_PATH)
        .into_iter()
        .map(|stat| (safe_find(stat, &["name"]), safe_find(stat, &["stat_id"])))
        .collect();

    Ok(schema)
}

/// Value of the stat with `stat_id` under a player, or `""` if the player has none.
fn player_stat_value<'a>(player: Node<'a, '_>, stat_id: &str) -> &'a str {
    find_all(player, PLAYER_STAT_PATH)
        .into_iter()
        .filter(|stat| {
            find_all(*stat, &["stat_id"])
                .iter()
                .any(|id| id.text().unwrap_or_default() == stat_id)
        })
        .flat_map(|stat| find_all(stat, &["value"]))
        .next()
        .and_then(|v| v.text())
        .unwrap_or_default()
}

/// Render a raw stat value as a CSV field.
///
/// Values containing a comma are quoted as-is (embedded quotes are not
/// escaped); `-` becomes an empty field.
pub fn format_stat_value(raw: &str) -> String {
    if raw.contains(',') {
        format!("\"{raw}\"")
    } else if raw == NOT_APPLICABLE {
        String::new()
    } else {
        raw.to_string()
    }
}

/// Flatten one players page into CSV lines, one per `player` element.
///
/// Each line has the three fixed fields followed by one field per stat in
/// `schema` order.
pub fn parse_player_rows(xml: &str, schema: &StatSchema) -> Result<Vec<String>> {
    let doc = Document::parse(xml)?;

    let rows = find_all(doc.root_element(), PLAYERS_PATH)
        .into_iter()
        .map(|player| {
            let fixed = PLAYER_FIELD_PATHS
                .iter()
                .map(|path| safe_find(player, path).to_string());
            let stats = schema
                .stat_ids()
                .map(|id| format_stat_value(player_stat_value(player, id)));

            fixed.chain(stats).collect::<Vec<_>>().join(",")
        })
        .collect();

    Ok(rows)
}
