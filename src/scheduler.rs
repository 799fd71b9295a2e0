use tracing::{debug, info, instrument};

use crate::game::{Board, GameResult, InvalidMoveError, Move, PlayerMarker};
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    XToMove,
    OToMove,
    WinnerDecided(PlayerMarker),
    Draw,
}

impl TurnState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::WinnerDecided(_) | TurnState::Draw)
    }
}

/// One applied move and its 1-based position in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ply {
    pub number: usize,
    pub move_: Move,
}

// ##############################
// # Game
// ##############################

/// Alternates two players over a single board.
///
/// The board is only ever lent to the side to move, and only while that side
/// picks its move; all writes happen here between turns.
pub struct Game {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    board: Board,
    state: TurnState,
    move_count: usize,
}

impl Game {
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Game {
            player_x,
            player_o,
            board: Board::new(),
            state: TurnState::XToMove,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn outcome(&self) -> Option<GameResult> {
        match self.state {
            TurnState::WinnerDecided(marker) => Some(GameResult::Winner(marker)),
            TurnState::Draw => Some(GameResult::Draw),
            TurnState::XToMove | TurnState::OToMove => None,
        }
    }

    /// Plays a single ply. Returns `Ok(None)` once the game is over; neither
    /// player is consulted after that.
    #[instrument(skip(self), fields(state = ?self.state, moves = self.move_count))]
    pub fn step(&mut self) -> Result<Option<Ply>, InvalidMoveError> {
        let (marker, player) = match self.state {
            TurnState::XToMove => (PlayerMarker::X, &mut self.player_x),
            TurnState::OToMove => (PlayerMarker::O, &mut self.player_o),
            TurnState::WinnerDecided(_) | TurnState::Draw => return Ok(None),
        };

        let move_ = player.next_move(&self.board);
        self.board.play(move_, marker)?;
        self.move_count += 1;
        debug!(marker = %marker, row = move_.row, col = move_.col, "applied move");

        self.state = match self.board.check_winner() {
            PlayerMarker::Empty if self.board.is_full() => TurnState::Draw,
            PlayerMarker::Empty => match marker {
                PlayerMarker::X => TurnState::OToMove,
                _ => TurnState::XToMove,
            },
            winner => TurnState::WinnerDecided(winner),
        };
        if let Some(result) = self.outcome() {
            info!(?result, moves = self.move_count, "game over");
        }

        Ok(Some(Ply {
            number: self.move_count,
            move_,
        }))
    }

    /// Steps until a terminal state is reached.
    pub fn run(&mut self) -> Result<GameResult, InvalidMoveError> {
        loop {
            if let Some(result) = self.outcome() {
                return Ok(result);
            }
            self.step()?;
        }
    }
}
