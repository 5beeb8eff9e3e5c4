//! Self-play driver for profiling: Black plays uniformly random legal moves,
//! White plays the move selector. Build with `--features hotpath` to get
//! timing reports; set `RUST_LOG=debug` to follow the games.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tile_slide::{GameMode, GameState, GameStatus, Player, RandomJitter};

const GAMES: usize = 200;
const MAX_PLIES: usize = 500;

#[hotpath::main]
fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let mut jitter = RandomJitter::seeded(42);
    let mut black_wins = 0;
    let mut white_wins = 0;
    let mut draws = 0;
    let mut unfinished = 0;

    for game_index in 0..GAMES {
        let mut state = GameState::new(GameMode::Ai);
        let mut plies = 0;

        while !state.is_over() && plies < MAX_PLIES {
            let move_ = match state.turn() {
                Player::Black => match state.legal_moves().choose(&mut rng) {
                    Some(m) => *m,
                    None => break,
                },
                Player::White => match tile_slide::select_move(&state, &mut jitter) {
                    Some(m) => m,
                    None => break,
                },
            };
            state = match state.apply_move(&move_) {
                Ok(next) => next,
                Err(err) => {
                    log::error!("game {}: rejected {}: {}", game_index, move_, err);
                    break;
                }
            };
            plies += 1;
        }

        log::info!("game {}: {} after {} plies", game_index, state.status(), plies);
        match state.status() {
            GameStatus::BlackWin => black_wins += 1,
            GameStatus::WhiteWin => white_wins += 1,
            GameStatus::Draw => draws += 1,
            GameStatus::Playing => unfinished += 1,
        }
    }

    println!(
        "{} games: black {} / white {} / draw {} / unfinished {}",
        GAMES, black_wins, white_wins, draws, unfinished
    );
}
