//! Two random players contesting a game of tic-tac-toe, one ply at a time.

pub mod error;
pub mod game;
pub mod player;
pub mod scheduler;
pub mod transcript;

pub use error::GameError;
pub use game::{Board, GameResult, InvalidMoveError, Move, PlayerMarker};
pub use player::{Player, RandomPlayer};
pub use scheduler::{Game, Ply, TurnState};
pub use transcript::{play_match, Tally};
