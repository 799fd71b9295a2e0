use std::fmt;

use thiserror::Error;

// #############################
// #                           #
// #      Fixed Constants      #
// #                           #
// #############################
pub const BOARD_SIZE: usize = 3;
pub const BOARD_SIZE_SQUARED: usize = BOARD_SIZE * BOARD_SIZE;
const FULL_BOARD: u16 = 0b111_111_111;
const WINNING_POSITIONS: [u16; 8] = [
    0b000_000_111, 0b000_111_000, 0b111_000_000, // rows
    0b001_001_001, 0b010_010_010, 0b100_100_100, // columns
    0b100_010_001, 0b001_010_100, // diagonals
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerMarker {
    X,
    O,
    Empty,
}

impl PlayerMarker {
    pub fn to_char(&self) -> char {
        match self {
            PlayerMarker::X => 'X',
            PlayerMarker::O => 'O',
            PlayerMarker::Empty => ' ',
        }
    }

    pub fn to_other(&self) -> Self {
        match self {
            PlayerMarker::X => PlayerMarker::O,
            PlayerMarker::O => PlayerMarker::X,
            PlayerMarker::Empty => PlayerMarker::Empty,
        }
    }
}

impl fmt::Display for PlayerMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Why a move was refused by [`Board::play`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("position ({row}, {col}) is already taken by {occupant}")]
    Occupied {
        row: usize,
        col: usize,
        occupant: PlayerMarker,
    },

    #[error("player {expected} is to move but '{found}' was played")]
    OutOfTurn {
        expected: PlayerMarker,
        found: PlayerMarker,
    },
}

// #############################
// #                           #
// #           Move            #
// #                           #
// #############################

/// A single placement. Coordinates are zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub marker: PlayerMarker,
}

impl Move {
    pub fn new(row: usize, col: usize, marker: PlayerMarker) -> Self {
        Move { row, col, marker }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(PlayerMarker),
    Draw,
}

// #############################
// #                           #
// #           Board           #
// #                           #
// #############################

/// 3x3 grid kept as one occupancy mask per player.
///
/// Cell `(row, col)` lives at bit `row * 3 + col`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Board {
    x: u16,
    o: u16,
}

impl Board {
    pub fn new() -> Self {
        Board { x: 0, o: 0 }
    }

    fn mask(row: usize, col: usize) -> u16 {
        1 << (row * BOARD_SIZE + col)
    }

    fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    pub fn get(&self, row: usize, col: usize) -> PlayerMarker {
        if !Self::in_bounds(row, col) {
            return PlayerMarker::Empty;
        }
        let mask = Self::mask(row, col);
        if self.x & mask != 0 {
            PlayerMarker::X
        } else if self.o & mask != 0 {
            PlayerMarker::O
        } else {
            PlayerMarker::Empty
        }
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        Self::in_bounds(row, col) && (self.x | self.o) & Self::mask(row, col) == 0
    }

    /// Writes `marker` into the cell without any checks, replacing whatever
    /// was there. Callers validate with [`Board::is_valid_move`] first.
    pub fn make_move(&mut self, row: usize, col: usize, marker: PlayerMarker) {
        let mask = Self::mask(row, col);
        self.x &= !mask;
        self.o &= !mask;
        match marker {
            PlayerMarker::X => self.x |= mask,
            PlayerMarker::O => self.o |= mask,
            PlayerMarker::Empty => {}
        }
    }

    /// Checked form of [`Board::make_move`] for a move made by `expected`.
    pub fn play(&mut self, move_: Move, expected: PlayerMarker) -> Result<(), InvalidMoveError> {
        let Move { row, col, marker } = move_;

        if marker != expected || marker == PlayerMarker::Empty {
            return Err(InvalidMoveError::OutOfTurn {
                expected,
                found: marker,
            });
        }
        if !Self::in_bounds(row, col) {
            return Err(InvalidMoveError::OutOfBounds { row, col });
        }
        if !self.is_valid_move(row, col) {
            return Err(InvalidMoveError::Occupied {
                row,
                col,
                occupant: self.get(row, col),
            });
        }

        self.make_move(row, col, marker);
        Ok(())
    }

    /// First completed line in row, column, diagonal order, or `Empty`.
    pub fn check_winner(&self) -> PlayerMarker {
        for &pos in WINNING_POSITIONS.iter() {
            if self.x & pos == pos {
                return PlayerMarker::X;
            } else if self.o & pos == pos {
                return PlayerMarker::O;
            }
        }
        PlayerMarker::Empty
    }

    pub fn is_full(&self) -> bool {
        (self.x | self.o) & FULL_BOARD == FULL_BOARD
    }

    pub fn empty_cells(&self) -> usize {
        BOARD_SIZE_SQUARED - ((self.x | self.o) & FULL_BOARD).count_ones() as usize
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.check_winner() {
            PlayerMarker::Empty if self.is_full() => Some(GameResult::Draw),
            PlayerMarker::Empty => None,
            winner => Some(GameResult::Winner(winner)),
        }
    }
}

// #############################
// #                           #
// #           Display         #
// #                           #
// #############################

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, " ")?;
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.get(row, col))?;
                if col < BOARD_SIZE - 1 {
                    write!(f, " | ")?;
                }
            }
            if row < BOARD_SIZE - 1 {
                writeln!(f)?;
                writeln!(f, "---|---|---")?;
            }
        }
        Ok(())
    }
}
