use crate::bitboard::BOARD_SIZE;
use crate::board::Board;
use crate::error::MoveError;
use crate::player::Player;
use crate::position::Position;
use crate::r#move::Move;
use crate::status::GameStatus;

/// A group this large wins outright.
pub const WIN_CONNECTION: usize = 10;

/// A player left with fewer tiles than this can no longer continue.
pub const MIN_TILES: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// White is played by the move selector.
    Ai,
    TwoPlayer,
}

/// Derive the status from tile counts and largest groups. Black's
/// connection win is checked before White's.
pub fn determine_status(
    black_count: usize,
    white_count: usize,
    black_max_connection: usize,
    white_max_connection: usize,
    win_connection: usize,
    min_tiles: usize,
) -> GameStatus {
    if black_max_connection >= win_connection {
        return GameStatus::BlackWin;
    }
    if white_max_connection >= win_connection {
        return GameStatus::WhiteWin;
    }

    match (black_count < min_tiles, white_count < min_tiles) {
        (true, true) => match black_max_connection.cmp(&white_max_connection) {
            std::cmp::Ordering::Greater => GameStatus::BlackWin,
            std::cmp::Ordering::Less => GameStatus::WhiteWin,
            std::cmp::Ordering::Equal => GameStatus::Draw,
        },
        (true, false) => GameStatus::WhiteWin,
        (false, true) => GameStatus::BlackWin,
        (false, false) => GameStatus::Playing,
    }
}

/// A complete snapshot of a game. Moves never modify a state; they return
/// the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    mode: GameMode,
    black_tile_count: usize,
    white_tile_count: usize,
    black_max_connection: usize,
    white_max_connection: usize,
    win_connection: usize,
    min_tiles: usize,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_options(mode, WIN_CONNECTION, MIN_TILES)
    }

    pub fn with_options(mode: GameMode, win_connection: usize, min_tiles: usize) -> Self {
        Self::derive(Board::initial(), Player::Black, mode, win_connection, min_tiles)
    }

    /// Wrap an arbitrary board, deriving counts and status from it.
    pub fn from_board(board: Board, current_player: Player, mode: GameMode) -> Self {
        Self::derive(board, current_player, mode, WIN_CONNECTION, MIN_TILES)
    }

    fn derive(
        board: Board,
        current_player: Player,
        mode: GameMode,
        win_connection: usize,
        min_tiles: usize,
    ) -> Self {
        let black_tile_count = board.tile_count(Player::Black);
        let white_tile_count = board.tile_count(Player::White);
        let black_max_connection = board.max_connection(Player::Black);
        let white_max_connection = board.max_connection(Player::White);
        let status = determine_status(
            black_tile_count,
            white_tile_count,
            black_max_connection,
            white_max_connection,
            win_connection,
            min_tiles,
        );

        GameState {
            board,
            current_player,
            status,
            mode,
            black_tile_count,
            white_tile_count,
            black_max_connection,
            white_max_connection,
            win_connection,
            min_tiles,
        }
    }

    /// A fresh game with the same mode and thresholds.
    pub fn restart(&self) -> Self {
        Self::with_options(self.mode, self.win_connection, self.min_tiles)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn win_connection(&self) -> usize {
        self.win_connection
    }

    pub fn min_tiles(&self) -> usize {
        self.min_tiles
    }

    pub fn black_tile_count(&self) -> usize {
        self.black_tile_count
    }

    pub fn white_tile_count(&self) -> usize {
        self.white_tile_count
    }

    pub fn black_max_connection(&self) -> usize {
        self.black_max_connection
    }

    pub fn white_max_connection(&self) -> usize {
        self.white_max_connection
    }

    pub fn tile_count(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black_tile_count,
            Player::White => self.white_tile_count,
        }
    }

    pub fn max_connection(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black_max_connection,
            Player::White => self.white_max_connection,
        }
    }

    /// True when the move selector should play next.
    pub fn is_automated_turn(&self) -> bool {
        self.mode == GameMode::Ai
            && self.current_player == Player::White
            && self.status == GameStatus::Playing
    }

    /// The group that decided a connection win, for highlighting. Empty
    /// while playing, on a draw, or when the win came from tile counts.
    pub fn winning_positions(&self) -> Vec<Position> {
        match self.status.winner() {
            Some(player) => self.board.winning_positions(player, self.win_connection),
            None => Vec::new(),
        }
    }

    /// Every move the side to play may make: both directions of each of its
    /// eight lines. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }

        let player = self.current_player;
        let axis = player.axis();
        let mut moves = Vec::with_capacity(BOARD_SIZE * 2);
        for index in 0..BOARD_SIZE as u8 {
            for direction in axis.directions() {
                moves.push(Move::new(player, axis, index, direction));
            }
        }
        moves
    }

    /// Check a move against the rules without applying it.
    pub fn validate(&self, move_: &Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }
        if move_.axis != self.current_player.axis() {
            return Err(MoveError::WrongAxis {
                player: self.current_player,
                axis: move_.axis,
            });
        }
        if !move_.is_well_formed() {
            return Err(MoveError::DirectionMismatch {
                axis: move_.axis,
                direction: move_.direction,
            });
        }
        Ok(())
    }

    pub fn is_legal_move(&self, move_: &Move) -> bool {
        self.validate(move_).is_ok()
    }

    /// Slide, clear isolated tiles, and return the resulting state with the
    /// turn passed to the other player.
    ///
    /// # Panics
    ///
    /// Panics if `move_.index` is outside the board.
    #[hotpath::measure]
    pub fn apply_move(&self, move_: &Move) -> Result<GameState, MoveError> {
        self.validate(move_)?;

        let board = self
            .board
            .slid(move_.axis, move_.index, move_.direction)
            .without_isolated();

        let next = Self::derive(
            board,
            self.current_player.opposite(),
            self.mode,
            self.win_connection,
            self.min_tiles,
        );

        log::debug!(
            "{}: black {} tiles (max {}), white {} tiles (max {})",
            move_,
            next.black_tile_count,
            next.black_max_connection,
            next.white_tile_count,
            next.white_max_connection
        );
        if next.is_over() {
            log::debug!("game over: {}", next.status);
        }

        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::TwoPlayer)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GameState(turn: {}, status: {}, black: {}/{}, white: {}/{})\n{}",
            self.current_player,
            self.status,
            self.black_tile_count,
            self.black_max_connection,
            self.white_tile_count,
            self.white_max_connection,
            self.board
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#move::{Axis, Direction};

    fn state(rows: [&str; 8], turn: Player) -> GameState {
        let board = Board::from_rows(&rows).expect("valid board notation");
        GameState::from_board(board, turn, GameMode::TwoPlayer)
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new(GameMode::Ai);
        assert_eq!(game.turn(), Player::Black);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.mode(), GameMode::Ai);
        assert_eq!(game.black_tile_count(), 32);
        assert_eq!(game.white_tile_count(), 32);
        assert_eq!(game.black_max_connection(), 1);
        assert_eq!(game.white_max_connection(), 1);
        assert_eq!(*game.board(), Board::initial());
    }

    #[test]
    fn test_apply_move_column_zero_up() {
        let game = GameState::default();
        let next = game
            .apply_move(&Move::column(Player::Black, 0, Direction::Up))
            .expect("legal opening move");

        let w = Some(Player::White);
        let k = Some(Player::Black);
        assert_eq!(next.board().line(Axis::Column, 0), [w, k, w, k, w, k, w, k]);
        assert_eq!(next.turn(), Player::White);
        assert_eq!(next.status(), GameStatus::Playing);
        // Column 0 now matches column 1, so rows form horizontal pairs
        assert_eq!(next.black_max_connection(), 2);
        assert_eq!(next.white_max_connection(), 2);
        assert_eq!(next.black_tile_count(), 32);
        assert_eq!(next.white_tile_count(), 32);
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let game = GameState::default();
        let before = game;
        let next = game
            .apply_move(&Move::column(Player::Black, 3, Direction::Down))
            .expect("legal move");
        assert_eq!(game, before);
        assert_ne!(next, game);
    }

    #[test]
    fn test_wrong_axis_rejected() {
        let game = GameState::default();
        let err = game
            .apply_move(&Move::row(Player::Black, 0, Direction::Left))
            .expect_err("black cannot slide rows");
        assert_eq!(
            err,
            MoveError::WrongAxis {
                player: Player::Black,
                axis: Axis::Row
            }
        );

        let white_turn = game
            .apply_move(&Move::column(Player::Black, 0, Direction::Up))
            .expect("legal move");
        assert!(white_turn
            .apply_move(&Move::column(Player::White, 0, Direction::Up))
            .is_err());
    }

    #[test]
    fn test_direction_mismatch_rejected() {
        let game = GameState::default();
        let bad = Move::column(Player::Black, 2, Direction::Left);
        assert_eq!(
            game.apply_move(&bad),
            Err(MoveError::DirectionMismatch {
                axis: Axis::Column,
                direction: Direction::Left
            })
        );
        assert!(!game.is_legal_move(&bad));
    }

    #[test]
    fn test_mover_identity_not_checked() {
        // Only the axis is checked against the side to play
        let game = GameState::default();
        let mv = Move::column(Player::White, 0, Direction::Up);
        assert!(game.apply_move(&mv).is_ok());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let game = GameState::default();
        let _ = game.apply_move(&Move::column(Player::Black, 9, Direction::Up));
    }

    #[test]
    fn test_black_wins_with_ten_connected() {
        let game = state(
            [
                "BBBB.BBB", "B...B...", "....B...", "........", "........", "WW....WW",
                "WW....WW", "........",
            ],
            Player::Black,
        );
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.black_max_connection(), 5);

        let next = game
            .apply_move(&Move::column(Player::Black, 4, Direction::Up))
            .expect("legal move");
        assert_eq!(next.status(), GameStatus::BlackWin);
        assert_eq!(next.black_max_connection(), 10);
        // The tile injected at (7, 4) was isolated and removed
        assert_eq!(next.board().get_tile(&Position::new(7, 4)), None);
        assert_eq!(next.black_tile_count(), 10);

        let winners = next.winning_positions();
        assert_eq!(winners.len(), 10);
        assert!(winners.contains(&Position::new(0, 4)));
        assert!(winners.contains(&Position::new(1, 4)));

        // Terminal states accept nothing
        assert_eq!(
            next.apply_move(&Move::row(Player::White, 0, Direction::Right)),
            Err(MoveError::GameOver {
                status: GameStatus::BlackWin
            })
        );
        assert!(next.legal_moves().is_empty());
    }

    #[test]
    fn test_both_below_min_tiles_with_equal_groups_is_draw() {
        let game = state(
            [
                "BWB.....", "........", "BWB.....", "......BW", "BWW...WB", "........",
                "BWW.....", "........",
            ],
            Player::Black,
        );
        assert_eq!(game.black_tile_count(), 8);
        assert_eq!(game.white_tile_count(), 8);
        assert_eq!(game.status(), GameStatus::Playing);

        // Column 1 shifts out of line with its neighbors; the whole comb on
        // the left is isolated at once and only the 2x2 block survives.
        let next = game
            .apply_move(&Move::column(Player::Black, 1, Direction::Up))
            .expect("legal move");
        assert_eq!(next.black_tile_count(), 2);
        assert_eq!(next.white_tile_count(), 2);
        assert_eq!(next.black_max_connection(), 1);
        assert_eq!(next.white_max_connection(), 1);
        assert_eq!(next.status(), GameStatus::Draw);
        assert!(next.winning_positions().is_empty());
    }

    #[test]
    fn test_status_precedence() {
        // Connection wins come first, Black before White
        assert_eq!(determine_status(32, 32, 10, 12, 10, 8), GameStatus::BlackWin);
        assert_eq!(determine_status(32, 32, 9, 10, 10, 8), GameStatus::WhiteWin);
        assert_eq!(determine_status(3, 3, 10, 2, 10, 8), GameStatus::BlackWin);
        // Both short of tiles: larger group wins, equal draws
        assert_eq!(determine_status(5, 6, 4, 3, 10, 8), GameStatus::BlackWin);
        assert_eq!(determine_status(5, 6, 3, 4, 10, 8), GameStatus::WhiteWin);
        assert_eq!(determine_status(5, 6, 3, 3, 10, 8), GameStatus::Draw);
        // One side short of tiles loses
        assert_eq!(determine_status(7, 20, 7, 2, 10, 8), GameStatus::WhiteWin);
        assert_eq!(determine_status(20, 7, 2, 7, 10, 8), GameStatus::BlackWin);
        assert_eq!(determine_status(8, 8, 9, 9, 10, 8), GameStatus::Playing);
    }

    #[test]
    fn test_from_board_draw() {
        let game = state(
            [
                "BB......", "BB......", "........", "........", "........", "......WW",
                "......WW", "........",
            ],
            Player::White,
        );
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.is_over());
    }

    #[test]
    fn test_legal_moves() {
        let game = GameState::default();
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 16);
        assert!(moves.iter().all(|m| m.axis == Axis::Column));
        assert!(moves.iter().all(|m| game.is_legal_move(m)));

        let white = game.apply_move(&moves[0]).expect("legal move");
        let moves = white.legal_moves();
        assert_eq!(moves.len(), 16);
        assert!(moves.iter().all(|m| m.axis == Axis::Row && m.player == Player::White));
    }

    #[test]
    fn test_automated_turn_and_restart() {
        let game = GameState::new(GameMode::Ai);
        assert!(!game.is_automated_turn());
        let next = game
            .apply_move(&Move::column(Player::Black, 5, Direction::Up))
            .expect("legal move");
        assert!(next.is_automated_turn());

        let two_player = GameState::new(GameMode::TwoPlayer)
            .apply_move(&Move::column(Player::Black, 5, Direction::Up))
            .expect("legal move");
        assert!(!two_player.is_automated_turn());

        assert_eq!(next.restart(), GameState::new(GameMode::Ai));
    }

    #[test]
    fn test_with_options_thresholds() {
        let game = GameState::with_options(GameMode::TwoPlayer, 2, 8);
        assert_eq!(game.win_connection(), 2);
        let next = game
            .apply_move(&Move::column(Player::Black, 0, Direction::Up))
            .expect("legal move");
        // Horizontal pairs appear for both; Black is checked first
        assert_eq!(next.status(), GameStatus::BlackWin);
        assert_eq!(next.winning_positions().len(), 2);
        assert_eq!(next.restart().win_connection(), 2);
    }
}
