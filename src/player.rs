use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::trace;

use crate::game::{Board, Move, PlayerMarker, BOARD_SIZE};

/// A source of moves for one side.
///
/// The scheduler calls `next_move` once per ply and only while the game is
/// still running, so implementations may assume an empty cell exists.
pub trait Player {
    fn marker(&self) -> PlayerMarker;
    fn next_move(&mut self, board: &Board) -> Move;
}

/// Plays uniformly random empty cells by reject sampling.
pub struct RandomPlayer<R = StdRng> {
    marker: PlayerMarker,
    rng: R,
}

impl RandomPlayer<StdRng> {
    pub fn new(marker: PlayerMarker) -> Self {
        Self::with_rng(marker, StdRng::from_entropy())
    }

    pub fn seeded(marker: PlayerMarker, seed: u64) -> Self {
        Self::with_rng(marker, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPlayer<R> {
    pub fn with_rng(marker: PlayerMarker, rng: R) -> Self {
        RandomPlayer { marker, rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn marker(&self) -> PlayerMarker {
        self.marker
    }

    // Unbounded on a full board.
    fn next_move(&mut self, board: &Board) -> Move {
        let mut rejected = 0u32;
        loop {
            let row = self.rng.gen_range(0..BOARD_SIZE);
            let col = self.rng.gen_range(0..BOARD_SIZE);
            if board.is_valid_move(row, col) {
                trace!(marker = %self.marker, row, col, rejected, "sampled move");
                return Move::new(row, col, self.marker);
            }
            rejected += 1;
        }
    }
}
