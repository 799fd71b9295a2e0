use clap::Parser;
use coroutine_tictactoe::{Player, PlayerMarker, RandomPlayer};

/// Watch two random players fight it out at tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "coroutine-tictactoe", version, long_about = None)]
pub struct Cli {
    /// Seed both players for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of games to play back to back
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub games: u32,

    /// Disable colored output in the summary line
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Players for the `game`-th match, X first.
    pub fn players(&self, game: u32) -> (Box<dyn Player>, Box<dyn Player>) {
        match self.seed {
            Some(seed) => {
                let base = seed.wrapping_add(2 * u64::from(game));
                (
                    Box::new(RandomPlayer::seeded(PlayerMarker::X, base)),
                    Box::new(RandomPlayer::seeded(PlayerMarker::O, base.wrapping_add(1))),
                )
            }
            None => (
                Box::new(RandomPlayer::new(PlayerMarker::X)),
                Box::new(RandomPlayer::new(PlayerMarker::O)),
            ),
        }
    }
}
