use crate::player::Player;
use crate::r#move::{Axis, Direction};
use crate::status::GameStatus;

/// A move the rules refuse. The state it was offered to is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over ({status}); no further moves are accepted")]
    GameOver { status: GameStatus },

    #[error("{player} may not slide a {axis}")]
    WrongAxis { player: Player, axis: Axis },

    #[error("a {axis} cannot slide {direction}")]
    DirectionMismatch { axis: Axis, direction: Direction },
}

/// Errors from parsing the `B`/`W`/`.` board notation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("unrecognized tile {ch:?} at row {row}, column {col}")]
    Tile { ch: char, row: usize, col: usize },
}
