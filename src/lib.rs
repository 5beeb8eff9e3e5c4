pub mod ai;
pub mod bitboard;
pub mod board;
pub mod encode;
pub mod error;
pub mod game;
pub mod r#move;
pub mod player;
pub mod position;
pub mod status;

pub use crate::ai::{enumerate_moves, select_move, Evaluator, JitterSource, NoJitter, RandomJitter};
pub use crate::board::{winning_positions, Board, Tile};
pub use crate::error::{BoardParseError, MoveError};
pub use crate::game::{GameMode, GameState, MIN_TILES, WIN_CONNECTION};
pub use crate::player::{is_legal_move_for_player, Player};
pub use crate::position::Position;
pub use crate::r#move::{Axis, Direction, Move};
pub use crate::status::GameStatus;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn tile_slide(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyGame>()?;
    m.add_class::<PyMove>()?;
    m.add("BLACK", Player::Black as i8)?;
    m.add("WHITE", Player::White as i8)?;
    m.add("BOARD_SIZE", bitboard::BOARD_SIZE)?;
    m.add("TOTAL_INPUT_PLANES", encode::TOTAL_INPUT_PLANES)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::ai::{Evaluator, RandomJitter};
    use crate::bitboard::BOARD_SIZE;
    use crate::encode;

    fn value_error(msg: impl Into<String>) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(msg.into())
    }

    fn check_index(index: usize) -> PyResult<u8> {
        if index < BOARD_SIZE {
            Ok(index as u8)
        } else {
            Err(value_error(format!(
                "line index must be between 0 and {}",
                BOARD_SIZE - 1
            )))
        }
    }

    fn parse_direction(direction: &str) -> PyResult<Direction> {
        match direction {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(value_error(format!("unknown direction {:?}", other))),
        }
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        state: GameState,
        jitter: RandomJitter,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        #[pyo3(signature = (ai_mode=false, seed=None))]
        pub fn new(ai_mode: bool, seed: Option<u64>) -> Self {
            let mode = if ai_mode {
                GameMode::Ai
            } else {
                GameMode::TwoPlayer
            };
            PyGame {
                state: GameState::new(mode),
                jitter: seed.map(RandomJitter::seeded).unwrap_or_default(),
            }
        }

        #[staticmethod]
        pub fn from_rows(rows: Vec<String>, turn: i8) -> PyResult<Self> {
            let player =
                Player::from_int(turn).ok_or_else(|| value_error("turn must be 1 or -1"))?;
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            let board = Board::from_rows(&rows).map_err(|e| value_error(e.to_string()))?;
            Ok(PyGame {
                state: GameState::from_board(board, player, GameMode::TwoPlayer),
                jitter: RandomJitter::default(),
            })
        }

        pub fn turn(&self) -> i8 {
            self.state.turn() as i8
        }

        pub fn is_over(&self) -> bool {
            self.state.is_over()
        }

        pub fn status(&self) -> String {
            self.state.status().to_string()
        }

        pub fn winner(&self) -> Option<i8> {
            self.state.status().winner().map(|p| p as i8)
        }

        pub fn tile_counts(&self) -> (usize, usize) {
            (self.state.black_tile_count(), self.state.white_tile_count())
        }

        pub fn max_connections(&self) -> (usize, usize) {
            (
                self.state.black_max_connection(),
                self.state.white_max_connection(),
            )
        }

        pub fn get_tile(&self, row: usize, col: usize) -> Option<i8> {
            let pos = Position::checked(row, col)?;
            self.state.board().get_tile(&pos).map(|p| p as i8)
        }

        pub fn is_automated_turn(&self) -> bool {
            self.state.is_automated_turn()
        }

        pub fn winning_positions(&self) -> Vec<(usize, usize)> {
            self.state
                .winning_positions()
                .into_iter()
                .map(|p| (p.row as usize, p.col as usize))
                .collect()
        }

        pub fn legal_moves(&self) -> Vec<PyMove> {
            self.state
                .legal_moves()
                .into_iter()
                .map(|m| PyMove { move_: m })
                .collect()
        }

        pub fn make_move(&mut self, move_: &PyMove) -> PyResult<()> {
            self.state = self
                .state
                .apply_move(&move_.move_)
                .map_err(|e| value_error(e.to_string()))?;
            Ok(())
        }

        /// Ask the move selector for a move without playing it.
        pub fn suggest_move(&mut self) -> PyResult<PyMove> {
            Evaluator::default()
                .select_move(&self.state, &mut self.jitter)
                .map(|move_| PyMove { move_ })
                .ok_or_else(|| value_error("game is over"))
        }

        pub fn restart(&mut self) {
            self.state = self.state.restart();
        }

        // ---------------------------------------------------------------------
        // Action-index protocol
        // ---------------------------------------------------------------------

        pub fn legal_action_indices(&self) -> Vec<usize> {
            self.state
                .legal_moves()
                .iter()
                .map(encode::encode_move)
                .collect()
        }

        pub fn apply_action(&mut self, action: usize) -> bool {
            match encode::decode_move(action, self.state.turn()) {
                Some(move_) => match self.state.apply_move(&move_) {
                    Ok(next) => {
                        self.state = next;
                        true
                    }
                    Err(_) => false,
                },
                None => false,
            }
        }

        pub fn action_size(&self) -> usize {
            encode::total_actions()
        }

        pub fn reward_absolute(&self) -> f32 {
            self.state.status().encode_winner_absolute()
        }

        pub fn reward_from_perspective(&self, perspective: i8) -> PyResult<f32> {
            let player = Player::from_int(perspective)
                .ok_or_else(|| value_error("perspective must be 1 or -1"))?;
            Ok(self.state.status().encode_winner_from_perspective(player))
        }

        pub fn encode_game_planes(&self) -> (Vec<f32>, usize, usize, usize) {
            encode::encode_game_planes(&self.state)
        }

        /// Copy of the position; the copy's selector draws from a stream
        /// forked off this game's.
        pub fn clone(&mut self) -> PyGame {
            PyGame {
                state: self.state,
                jitter: self.jitter.fork(),
            }
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.state.hash(&mut hasher);
            hasher.finish()
        }

        pub fn __str__(&self) -> String {
            self.state.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(turn={}, status={})",
                self.state.turn(),
                self.state.status()
            )
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[staticmethod]
        pub fn column(player: i8, index: usize, direction: &str) -> PyResult<Self> {
            let player =
                Player::from_int(player).ok_or_else(|| value_error("player must be 1 or -1"))?;
            Ok(PyMove {
                move_: Move::column(player, check_index(index)?, parse_direction(direction)?),
            })
        }

        #[staticmethod]
        pub fn row(player: i8, index: usize, direction: &str) -> PyResult<Self> {
            let player =
                Player::from_int(player).ok_or_else(|| value_error("player must be 1 or -1"))?;
            Ok(PyMove {
                move_: Move::row(player, check_index(index)?, parse_direction(direction)?),
            })
        }

        pub fn player(&self) -> i8 {
            self.move_.player as i8
        }

        pub fn axis(&self) -> String {
            self.move_.axis.to_string()
        }

        pub fn index(&self) -> usize {
            self.move_.index as usize
        }

        pub fn direction(&self) -> String {
            self.move_.direction.to_string()
        }

        pub fn encode(&self) -> usize {
            encode::encode_move(&self.move_)
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Move.{}({}, {}, {:?})",
                self.move_.axis,
                self.move_.player as i8,
                self.move_.index,
                self.move_.direction.to_string()
            )
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }
}
