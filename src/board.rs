use std::fmt;

use crate::bitboard::{Bitboard, BOARD_SIZE};
use crate::error::BoardParseError;
use crate::game::WIN_CONNECTION;
use crate::player::Player;
use crate::position::Position;
use crate::r#move::{Axis, Direction};

/// Contents of one cell: a player's tile, or `None` for a hole.
pub type Tile = Option<Player>;

/// The 8×8 grid. A plain value: every transition returns a new `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

/// Black tiles of the starting checkerboard: `(row + col)` even.
const CHECKERBOARD_BLACK: u64 = 0xAA55_AA55_AA55_AA55;

/// The tile injected next to `neighbor` at the trailing end of a slide.
/// Never extends a run: black next to white, white next to black or a hole.
fn injected_tile(neighbor: Tile) -> Player {
    match neighbor {
        Some(Player::Black) => Player::White,
        Some(Player::White) | None => Player::Black,
    }
}

impl Board {
    /// A board with no tiles at all.
    pub fn empty() -> Self {
        Board {
            black: Bitboard::empty(),
            white: Bitboard::empty(),
        }
    }

    /// The starting position: a full checkerboard with Black on `(0, 0)`.
    pub fn initial() -> Self {
        let black = Bitboard::from_bits(CHECKERBOARD_BLACK);
        Board {
            black,
            white: !black,
        }
    }

    /// Parse eight rows of `B`, `W` and `.` (top row first).
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(BoardParseError::RowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = match ch {
                    '.' => None,
                    _ => Some(Player::from_char(ch).ok_or(BoardParseError::Tile { ch, row, col })?),
                };
                board.set_tile(&Position::new(row as u8, col as u8), tile);
            }
        }
        Ok(board)
    }

    pub fn get_tile(&self, pos: &Position) -> Tile {
        if !pos.is_valid() {
            return None;
        }
        let idx = pos.to_index();
        if self.black.get(idx) {
            Some(Player::Black)
        } else if self.white.get(idx) {
            Some(Player::White)
        } else {
            None
        }
    }

    pub fn set_tile(&mut self, pos: &Position, tile: Tile) {
        if pos.is_valid() {
            let idx = pos.to_index();
            self.black.clear(idx);
            self.white.clear(idx);
            match tile {
                Some(Player::Black) => self.black.set(idx),
                Some(Player::White) => self.white.set(idx),
                None => {}
            }
        }
    }

    #[inline]
    pub fn tiles_for(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    pub fn tile_count(&self, player: Player) -> usize {
        self.tiles_for(player).count() as usize
    }

    /// The eight tiles of a row (left to right) or column (top to bottom).
    pub fn line(&self, axis: Axis, index: u8) -> [Tile; BOARD_SIZE] {
        let mut line = [None; BOARD_SIZE];
        for (i, tile) in line.iter_mut().enumerate() {
            *tile = self.get_tile(&line_position(axis, index, i));
        }
        line
    }

    fn with_line(&self, axis: Axis, index: u8, line: &[Tile; BOARD_SIZE]) -> Board {
        let mut board = *self;
        for (i, tile) in line.iter().enumerate() {
            board.set_tile(&line_position(axis, index, i), *tile);
        }
        board
    }

    /// Slide one line by a cell. The tile at the leading edge is discarded and
    /// a fresh tile, opposite in color to its new neighbor, fills the trailing
    /// edge.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid line index.
    pub fn slid(&self, axis: Axis, index: u8, direction: Direction) -> Board {
        assert!(
            (index as usize) < BOARD_SIZE,
            "{} index {} out of range 0..{}",
            axis,
            index,
            BOARD_SIZE
        );
        let old = self.line(axis, index);
        let mut line = [None; BOARD_SIZE];
        if direction.drops_first() {
            line[..BOARD_SIZE - 1].copy_from_slice(&old[1..]);
            line[BOARD_SIZE - 1] = Some(injected_tile(line[BOARD_SIZE - 2]));
        } else {
            line[1..].copy_from_slice(&old[..BOARD_SIZE - 1]);
            line[0] = Some(injected_tile(line[1]));
        }
        self.with_line(axis, index, &line)
    }

    /// Tiles with no occupied orthogonal neighbor.
    pub fn isolated(&self) -> Bitboard {
        let occupied = self.occupied();
        occupied & !occupied.neighbors()
    }

    /// Clear every isolated tile at once. Whether a tile is isolated is
    /// decided on `self`, never on a partially cleared board.
    pub fn without_isolated(&self) -> Board {
        let keep = !self.isolated();
        Board {
            black: self.black & keep,
            white: self.white & keep,
        }
    }

    /// The largest 4-connected group of `player`'s tiles. Among equal groups
    /// the one reached first in row-major order wins.
    pub fn largest_group(&self, player: Player) -> Bitboard {
        let mut best = Bitboard::empty();
        for group in self.tiles_for(player).components() {
            if group.count() > best.count() {
                best = group;
            }
        }
        best
    }

    pub fn max_connection(&self, player: Player) -> usize {
        self.largest_group(player).count() as usize
    }

    /// The largest group of `player` if it has at least `threshold` tiles.
    pub fn winning_group(&self, player: Player, threshold: usize) -> Bitboard {
        let group = self.largest_group(player);
        if group.count() as usize >= threshold {
            group
        } else {
            Bitboard::empty()
        }
    }

    pub fn winning_positions(&self, player: Player, threshold: usize) -> Vec<Position> {
        self.winning_group(player, threshold)
            .iter_ones()
            .map(Position::from_index)
            .collect()
    }
}

/// Positions of `player`'s winning group under the standard connection
/// threshold; empty when no group is large enough.
pub fn winning_positions(board: &Board, player: Player) -> Vec<Position> {
    board.winning_positions(player, WIN_CONNECTION)
}

fn line_position(axis: Axis, index: u8, i: usize) -> Position {
    match axis {
        Axis::Row => Position::new(index, i as u8),
        Axis::Column => Position::new(i as u8, index),
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row as u8, col as u8);
                let c = match self.get_tile(&pos) {
                    Some(player) => player.to_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
