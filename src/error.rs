use crate::game::InvalidMoveError;

/// Errors that can end a match early.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] InvalidMoveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
