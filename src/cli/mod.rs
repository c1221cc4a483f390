//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{LeagueKey, Season};

use crate::output::DEFAULT_OUTPUT;

/// Arguments shared by every command that talks to the API.
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// League key, e.g. `nhl.l.60602` (or set `YAHOO_FANTASY_LEAGUE_KEY`).
    #[clap(long, short)]
    pub league_key: Option<LeagueKey>,

    /// Authorization code, skipping the browser prompt.
    #[clap(long)]
    pub auth_code: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Export every player's season stats for a league to CSV.
    ///
    /// Columns are the league's stat categories, read from its settings.
    PlayerStats {
        #[clap(flatten)]
        auth: AuthArgs,

        /// Season year (e.g. 2024).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Yahoo position filter (`P` for all skaters, `G` for goalies).
        #[clap(long, short, default_value = "P")]
        position: String,

        /// CSV file to write; overwritten if it exists.
        #[clap(long, short, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// List the league's stat categories and their CSV column names.
    StatCategories {
        #[clap(flatten)]
        auth: AuthArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "yahoo-fantasy", about = "Yahoo Fantasy Sports stats exporter")]
pub struct Yahoo {
    /// Log every request URL.
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Yahoo Fantasy Sports
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
