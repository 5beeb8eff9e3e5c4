use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The axis this direction slides along.
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Column,
            Direction::Left | Direction::Right => Axis::Row,
        }
    }

    /// True when the tile at index 0 of the line is the one that falls off.
    pub(crate) fn drops_first(&self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

impl Axis {
    /// The two directions a line on this axis can slide.
    pub fn directions(&self) -> [Direction; 2] {
        match self {
            Axis::Column => [Direction::Up, Direction::Down],
            Axis::Row => [Direction::Left, Direction::Right],
        }
    }
}

/// A request to slide one row or column by one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub axis: Axis,
    pub index: u8,
    pub direction: Direction,
}

impl Move {
    pub fn new(player: Player, axis: Axis, index: u8, direction: Direction) -> Self {
        Move {
            player,
            axis,
            index,
            direction,
        }
    }

    pub fn column(player: Player, index: u8, direction: Direction) -> Self {
        Self::new(player, Axis::Column, index, direction)
    }

    pub fn row(player: Player, index: u8, direction: Direction) -> Self {
        Self::new(player, Axis::Row, index, direction)
    }

    /// Direction agrees with axis (a column never slides left, a row never up).
    pub fn is_well_formed(&self) -> bool {
        self.direction.axis() == self.axis
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.player, self.axis, self.index, self.direction
        )
    }
}
