use crate::bitboard::{BOARD_AREA, BOARD_SIZE};
use crate::game::GameState;
use crate::player::Player;
use crate::r#move::{Direction, Move};

/// Planes for tile positions (side to move, opponent)
const TILE_PLANES: usize = 2;

/// Constant plane for the side to move
const CONSTANT_PLANES: usize = 1;

/// Total number of input planes
pub const TOTAL_INPUT_PLANES: usize = TILE_PLANES + CONSTANT_PLANES;

/// Encode the state into a flat f32 array in row-major order.
/// Returns (flat_data, num_planes, height, width).
pub fn encode_game_planes(state: &GameState) -> (Vec<f32>, usize, usize, usize) {
    let perspective = state.turn();
    let mut data = vec![0.0f32; TOTAL_INPUT_PLANES * BOARD_AREA];

    let board = state.board();
    let own = board.tiles_for(perspective);
    let opp = board.tiles_for(perspective.opposite());

    // Plane 0: side to move
    for idx in own.iter_ones() {
        data[idx] = 1.0;
    }

    // Plane 1: opponent
    for idx in opp.iter_ones() {
        data[BOARD_AREA + idx] = 1.0;
    }

    // Color plane (last plane)
    if perspective == Player::Black {
        data[TILE_PLANES * BOARD_AREA..].fill(1.0);
    }

    (data, TOTAL_INPUT_PLANES, BOARD_SIZE, BOARD_SIZE)
}

fn direction_index(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Encode a move as an action index: `direction * 8 + line index`.
pub fn encode_move(move_: &Move) -> usize {
    direction_index(move_.direction) * BOARD_SIZE + move_.index as usize
}

/// Decode an action index into a move for `player`. The axis follows the
/// direction, so a decoded move may still be illegal for `player`.
pub fn decode_move(action: usize, player: Player) -> Option<Move> {
    if action >= total_actions() {
        return None;
    }
    let direction = Direction::ALL[action / BOARD_SIZE];
    let index = (action % BOARD_SIZE) as u8;
    Some(Move::new(player, direction.axis(), index, direction))
}

pub fn total_actions() -> usize {
    Direction::ALL.len() * BOARD_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameMode;
    use crate::r#move::Axis;

    fn get_plane_value(data: &[f32], plane: usize, row: usize, col: usize) -> f32 {
        data[plane * BOARD_AREA + row * BOARD_SIZE + col]
    }

    #[test]
    fn test_encode_initial() {
        let state = GameState::new(GameMode::TwoPlayer);
        let (data, num_planes, height, width) = encode_game_planes(&state);

        assert_eq!(num_planes, TOTAL_INPUT_PLANES);
        assert_eq!((height, width), (8, 8));
        assert_eq!(data.len(), num_planes * height * width);

        // Black to move: (0,0) is own, (0,1) opponent
        assert_eq!(get_plane_value(&data, 0, 0, 0), 1.0);
        assert_eq!(get_plane_value(&data, 1, 0, 0), 0.0);
        assert_eq!(get_plane_value(&data, 0, 0, 1), 0.0);
        assert_eq!(get_plane_value(&data, 1, 0, 1), 1.0);
        assert_eq!(get_plane_value(&data, 2, 4, 4), 1.0);
    }

    #[test]
    fn test_encode_white_perspective() {
        let state = GameState::new(GameMode::TwoPlayer)
            .apply_move(&Move::column(Player::Black, 7, Direction::Down))
            .expect("legal move");
        let (data, ..) = encode_game_planes(&state);

        // (0,1) is White's in both positions
        assert_eq!(get_plane_value(&data, 0, 0, 1), 1.0);
        assert_eq!(get_plane_value(&data, 1, 0, 1), 0.0);
        assert!(data[2 * BOARD_AREA..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_action_indices_cover_all_moves() {
        assert_eq!(total_actions(), 32);
        for action in 0..total_actions() {
            let mv = decode_move(action, Player::White).expect("in range");
            assert_eq!(encode_move(&mv), action);
            assert!(mv.is_well_formed());
        }
        assert!(decode_move(32, Player::Black).is_none());
    }

    #[test]
    fn test_decode_examples() {
        let mv = decode_move(3, Player::Black).expect("in range");
        assert_eq!(mv, Move::column(Player::Black, 3, Direction::Up));

        let mv = decode_move(31, Player::White).expect("in range");
        assert_eq!(mv.axis, Axis::Row);
        assert_eq!(mv.direction, Direction::Right);
        assert_eq!(mv.index, 7);
    }

    #[test]
    fn test_legal_moves_map_to_legal_actions() {
        let state = GameState::default();
        for mv in state.legal_moves() {
            let decoded = decode_move(encode_move(&mv), state.turn()).expect("in range");
            assert_eq!(decoded, mv);
            assert!(state.is_legal_move(&decoded));
        }
    }
}
