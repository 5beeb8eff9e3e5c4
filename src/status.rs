use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    BlackWin,
    WhiteWin,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::BlackWin => Some(Player::Black),
            GameStatus::WhiteWin => Some(Player::White),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }

    /// +1 for a Black win, -1 for a White win, 0 otherwise.
    pub fn encode_winner_absolute(&self) -> f32 {
        match self {
            GameStatus::BlackWin => 1.0,
            GameStatus::WhiteWin => -1.0,
            GameStatus::Playing | GameStatus::Draw => 0.0,
        }
    }

    pub fn encode_winner_from_perspective(&self, perspective: Player) -> f32 {
        match perspective {
            Player::Black => self.encode_winner_absolute(),
            Player::White => -self.encode_winner_absolute(),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "Playing"),
            GameStatus::BlackWin => write!(f, "Black wins"),
            GameStatus::WhiteWin => write!(f, "White wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
