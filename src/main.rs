//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use yahoo_fantasy::{
    cli::{Commands, GetCmd, Yahoo},
    commands::{
        player_stats::{handle_player_stats, PlayerStatsParams},
        stat_categories::handle_stat_categories,
    },
    Credentials, Endpoints,
};

fn init_tracing(debug: bool) {
    let default = if debug {
        "yahoo_fantasy=debug"
    } else {
        "yahoo_fantasy=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Yahoo::parse();
    init_tracing(app.debug);

    let credentials = Credentials::from_env().context("OAuth client credentials are required")?;
    let endpoints = Endpoints::default();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::PlayerStats {
                auth,
                season,
                position,
                output,
            } => {
                handle_player_stats(
                    PlayerStatsParams {
                        league_key: auth.league_key,
                        season,
                        position,
                        output,
                        auth_code: auth.auth_code,
                    },
                    &credentials,
                    &endpoints,
                )
                .await
                .context("player stats export failed")?;
            }

            GetCmd::StatCategories { auth, json } => handle_stat_categories(
                auth.league_key,
                json,
                auth.auth_code,
                &credentials,
                &endpoints,
            )
            .await
            .context("failed to load stat categories")?,
        },
    }

    Ok(())
}
