use crate::r#move::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Player {
    Black = 1,
    White = -1,
}

impl Player {
    pub fn opposite(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The only axis this player may slide: Black moves columns, White moves rows.
    pub fn axis(&self) -> Axis {
        match self {
            Player::Black => Axis::Column,
            Player::White => Axis::Row,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'B' | 'b' => Some(Player::Black),
            'W' | 'w' => Some(Player::White),
            _ => None,
        }
    }

    pub fn from_int(i: i8) -> Option<Player> {
        match i {
            1 => Some(Player::Black),
            -1 => Some(Player::White),
            _ => None,
        }
    }
}

/// Whether `player` is allowed to slide lines along `axis`. Depends on
/// nothing but the two arguments.
pub fn is_legal_move_for_player(player: Player, axis: Axis) -> bool {
    player.axis() == axis
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let player_str = match self {
            Player::Black => "Black",
            Player::White => "White",
        };
        write!(f, "{}", player_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_axes() {
        assert!(is_legal_move_for_player(Player::Black, Axis::Column));
        assert!(!is_legal_move_for_player(Player::Black, Axis::Row));
        assert!(is_legal_move_for_player(Player::White, Axis::Row));
        assert!(!is_legal_move_for_player(Player::White, Axis::Column));
    }

    #[test]
    fn test_char_round_trip() {
        for player in [Player::Black, Player::White] {
            assert_eq!(Player::from_char(player.to_char()), Some(player));
            assert_eq!(Player::from_int(player as i8), Some(player));
        }
        assert_eq!(Player::from_char('.'), None);
        assert_eq!(Player::Black.opposite(), Player::White);
        assert_eq!(Player::White.opposite(), Player::Black);
    }
}
