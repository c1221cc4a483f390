//! Yahoo Fantasy Sports stats exporter
//!
//! Signs in to the Yahoo Fantasy Sports API with the OAuth2 authorization-code
//! flow, reads a league's stat categories and pages through the league's
//! player list to build one CSV row of season stats per player.
//!
//! ## Features
//!
//! - **Authorization**: out-of-band code flow with a pluggable code provider
//!   (browser + console prompt, or a fixed code)
//! - **Dynamic columns**: one CSV column per stat category in the league settings
//! - **Best-effort export**: if a page fails, the players gathered so far are still written
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yahoo_fantasy::{commands::player_stats::*, Credentials, Endpoints, Season};
//!
//! # async fn example() -> yahoo_fantasy::Result<()> {
//! let credentials = Credentials::from_env()?;
//! let params = PlayerStatsParams {
//!     league_key: Some("nhl.l.60602".parse()?),
//!     season: Season::new(2024),
//!     position: "P".to_string(),
//!     output: "out.csv".into(),
//!     auth_code: None,
//! };
//!
//! handle_player_stats(params, &credentials, &Endpoints::default()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The app credentials are required:
//! ```bash
//! export YAHOO_OAUTH_CLIENT_ID=...
//! export YAHOO_OAUTH_CLIENT_SECRET=...
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod yahoo;

// Re-export commonly used types
pub use cli::types::{LeagueKey, Season};
pub use config::{Credentials, Endpoints};
pub use error::{Result, YahooError};
pub use yahoo::types::{StatDefinition, StatSchema};

pub const LEAGUE_KEY_ENV_VAR: &str = "YAHOO_FANTASY_LEAGUE_KEY";

/// League exported when neither `--league-key` nor the env var is set.
pub const DEFAULT_LEAGUE_KEY: &str = "nhl.l.60602";
