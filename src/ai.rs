//! Greedy one-ply move selection for the automated (White) side.
//!
//! Every candidate move is applied once and the resulting position is scored
//! statically. There is no lookahead: the opponent's reply is never
//! considered.

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bitboard::BOARD_SIZE;
use crate::game::GameState;
use crate::player::Player;
use crate::r#move::{Direction, Move};
use crate::status::GameStatus;

/// Default upper bound (exclusive) of the random tie-breaking term.
pub const DEFAULT_JITTER_SCALE: f64 = 10.0;

/// Source of the small random term added to every evaluation.
pub trait JitterSource {
    fn jitter(&mut self) -> f64;
}

/// Uniform jitter in `[0, scale)`.
#[derive(Debug)]
pub struct RandomJitter {
    rng: StdRng,
    scale: f64,
}

impl RandomJitter {
    pub fn new() -> Self {
        RandomJitter {
            rng: StdRng::from_rng(&mut rand::rng()),
            scale: DEFAULT_JITTER_SCALE,
        }
    }

    /// Reproducible jitter for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomJitter {
            rng: StdRng::seed_from_u64(seed),
            scale: DEFAULT_JITTER_SCALE,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// An independent source seeded from this one's stream. Forks of equally
    /// seeded parents produce equal streams.
    pub fn fork(&mut self) -> Self {
        RandomJitter {
            rng: StdRng::from_rng(&mut self.rng),
            scale: self.scale,
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for RandomJitter {
    fn jitter(&mut self) -> f64 {
        let unit: f64 = StandardUniform.sample(&mut self.rng);
        unit * self.scale
    }
}

/// Always zero: makes selection fully deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter(&mut self) -> f64 {
        0.0
    }
}

/// Weights of the static evaluation, scored from White's point of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluator {
    pub connection_weight: f64,
    pub tile_weight: f64,
    pub shrink_weight: f64,
    /// Replaces the formula entirely for a decided game.
    pub win_score: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            connection_weight: 100.0,
            tile_weight: 10.0,
            shrink_weight: 50.0,
            win_score: 10_000.0,
        }
    }
}

impl Evaluator {
    /// Score `after`, the state reached from `before` by one move.
    pub fn score(&self, before: &GameState, after: &GameState, jitter: &mut impl JitterSource) -> f64 {
        match after.status() {
            GameStatus::WhiteWin => return self.win_score,
            GameStatus::BlackWin => return -self.win_score,
            GameStatus::Draw => return 0.0,
            GameStatus::Playing => {}
        }

        let connection =
            after.white_max_connection() as f64 - after.black_max_connection() as f64;
        let tiles = after.white_tile_count() as f64 - after.black_tile_count() as f64;
        let black_removed = before.black_tile_count() as f64 - after.black_tile_count() as f64;

        self.connection_weight * connection
            + self.tile_weight * tiles
            + self.shrink_weight * black_removed
            + jitter.jitter()
    }

    /// The highest-scoring enumerated move; the first one seen wins ties.
    /// `None` once the game is over.
    #[hotpath::measure]
    pub fn select_move(&self, state: &GameState, jitter: &mut impl JitterSource) -> Option<Move> {
        if state.is_over() {
            return None;
        }

        let mut best: Option<(Move, f64)> = None;
        for move_ in enumerate_moves(state) {
            let after = state.apply_move(&move_).ok()?;
            let score = self.score(state, &after, jitter);
            log::trace!("candidate {}: {:.2}", move_, score);

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((move_, score)),
            }
        }

        let (move_, score) = best?;
        log::debug!("selected {} ({:.2})", move_, score);
        Some(move_)
    }
}

/// The automated opponent's candidate moves: Black slides each column up,
/// White slides each row right, in index order. The opposite directions are
/// never considered.
pub fn enumerate_moves(state: &GameState) -> Vec<Move> {
    let player = state.turn();
    (0..BOARD_SIZE as u8)
        .map(|index| match player {
            Player::Black => Move::column(player, index, Direction::Up),
            Player::White => Move::row(player, index, Direction::Right),
        })
        .collect()
}

/// `Evaluator::select_move` with the default weights.
pub fn select_move(state: &GameState, jitter: &mut impl JitterSource) -> Option<Move> {
    Evaluator::default().select_move(state, jitter)
}
