mod cli;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use coroutine_tictactoe::{play_match, Game, Tally};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    info!(seed = ?cli.seed, games = cli.games, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut tally = Tally::default();

    for i in 0..cli.games {
        let (player_x, player_o) = cli.players(i);
        let mut game = Game::new(player_x, player_o);
        let result = play_match(&mut out, &mut game)
            .inspect_err(|err| error!(%err, game = i, "match aborted"))?;
        tally.record(result);
    }

    if cli.games > 1 {
        writeln!(out, "{}", tally)?;
    }

    Ok(())
}
