use std::fmt;
use std::io::Write;

use colored::Colorize;

use crate::error::GameError;
use crate::game::{Board, GameResult, PlayerMarker};
use crate::scheduler::Game;

fn write_board<W: Write>(out: &mut W, board: &Board) -> std::io::Result<()> {
    write!(out, "\n{}\n\n", board)
}

/// Plays `game` to the end, printing every move and the final result.
pub fn play_match<W: Write>(out: &mut W, game: &mut Game) -> Result<GameResult, GameError> {
    writeln!(out, "=== Tic-Tac-Toe Game ===")?;
    writeln!(out, "Two coroutines playing against each other")?;
    writeln!(out)?;
    write_board(out, game.board())?;

    while let Some(ply) = game.step()? {
        writeln!(
            out,
            "Move {}: Player {} moves to position ({}, {})",
            ply.number,
            ply.move_.marker,
            ply.move_.row + 1,
            ply.move_.col + 1
        )?;
        write_board(out, game.board())?;
    }

    let result = game.run()?;
    match result {
        GameResult::Winner(marker) => writeln!(out, "Winner: Player {}!", marker)?,
        GameResult::Draw => writeln!(out, "Game ended in a draw!")?,
    }
    writeln!(out)?;
    out.flush()?;

    Ok(result)
}

// ##############################
// # Tally
// ##############################

/// Running score over several matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins_x: u32,
    pub wins_o: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Winner(PlayerMarker::X) => self.wins_x += 1,
            GameResult::Winner(PlayerMarker::O) => self.wins_o += 1,
            GameResult::Winner(PlayerMarker::Empty) | GameResult::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player X: {} | Player O: {} | Draws: {}",
            self.wins_x.to_string().as_str().red(),
            self.wins_o.to_string().as_str().green(),
            self.draws.to_string().as_str().yellow()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::scripted_game;

    const EMPTY_BOARD: &str = "\n   |   |  \n---|---|---\n   |   |  \n---|---|---\n   |   |  \n\n";

    fn transcript(game: &mut Game) -> (String, GameResult) {
        let mut out = Vec::new();
        let result = play_match(&mut out, game).unwrap();
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn test_transcript_for_top_row_win() {
        let (mut game, _, _) = scripted_game(&[(0, 0), (0, 1), (0, 2)], &[(1, 0), (1, 1)]);
        let (text, result) = transcript(&mut game);

        assert_eq!(result, GameResult::Winner(PlayerMarker::X));
        let header = format!(
            "=== Tic-Tac-Toe Game ===\nTwo coroutines playing against each other\n\n{}",
            EMPTY_BOARD
        );
        assert!(text.starts_with(&header));
        assert!(text.contains("Move 1: Player X moves to position (1, 1)\n"));
        assert!(text.contains("Move 2: Player O moves to position (2, 1)\n"));
        assert_eq!(text.matches("Move ").count(), 5);
        assert!(text.ends_with(
            "Move 5: Player X moves to position (1, 3)\n\
             \n X | X | X\n---|---|---\n O | O |  \n---|---|---\n   |   |  \n\n\
             Winner: Player X!\n\n"
        ));
    }

    #[test]
    fn test_transcript_for_draw() {
        let (mut game, _, _) = scripted_game(
            &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
            &[(0, 1), (1, 1), (1, 2), (2, 0)],
        );
        let (text, result) = transcript(&mut game);

        assert_eq!(result, GameResult::Draw);
        assert_eq!(text.matches("Move ").count(), 9);
        assert!(text.ends_with(
            "\n X | O | X\n---|---|---\n X | O | O\n---|---|---\n O | X | X\n\n\
             Game ended in a draw!\n\n"
        ));
    }

    #[test]
    fn test_tally_counts_results() {
        colored::control::set_override(false);
        let mut tally = Tally::default();
        tally.record(GameResult::Winner(PlayerMarker::X));
        tally.record(GameResult::Winner(PlayerMarker::X));
        tally.record(GameResult::Winner(PlayerMarker::O));
        tally.record(GameResult::Draw);

        assert_eq!(tally.games(), 4);
        assert_eq!(tally.to_string(), "Player X: 2 | Player O: 1 | Draws: 1");
    }
}
