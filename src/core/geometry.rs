//! Grid geometry: positions, beam directions, and quarter-turn arithmetic.
//!
//! ## Coordinates
//!
//! Positions are `(row, col)` with row 0 at the top of the board. `North`
//! decreases the row, `South` increases it; `East` increases the column,
//! `West` decreases it. All rotation arithmetic is in quarter turns, so an
//! orientation is always one of the four cardinal rotations.

use serde::{Deserialize, Serialize};

/// A cell address on the board.
///
/// Only a location; carries no piece or terrain information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position from row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The neighboring position one cell in `direction`.
    ///
    /// Returns `None` when the step would leave the coordinate space (row or
    /// column below zero). Upper bounds are the board's concern.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position { row, col })
    }

    /// Chebyshev distance: the number of king steps between two positions.
    ///
    /// ```
    /// use laser_chess::core::Position;
    ///
    /// let a = Position::new(3, 3);
    /// assert_eq!(a.king_distance(Position::new(4, 4)), 1);
    /// assert_eq!(a.king_distance(Position::new(3, 7)), 4);
    /// ```
    #[must_use]
    pub fn king_distance(self, other: Position) -> u8 {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cardinal direction of beam travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions, clockwise from North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The `(row, col)` delta of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// This direction turned by `rotation`.
    ///
    /// ```
    /// use laser_chess::core::{Direction, Rotation};
    ///
    /// assert_eq!(Direction::North.rotated(Rotation::Cw), Direction::East);
    /// assert_eq!(Direction::North.rotated(Rotation::Ccw), Direction::West);
    /// assert_eq!(Direction::East.rotated(Rotation::Half), Direction::West);
    /// ```
    #[must_use]
    pub const fn rotated(self, rotation: Rotation) -> Self {
        let index = (self.index() + rotation.quarter_turns()) % 4;
        Self::ALL[index]
    }

    const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        write!(f, "{name}")
    }
}

/// A rotation delta a player may apply to a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Quarter turn clockwise (+90°).
    Cw,
    /// Quarter turn counter-clockwise (−90°).
    Ccw,
    /// Half turn (180°).
    Half,
}

impl Rotation {
    /// The rotation expressed as clockwise quarter turns.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Rotation::Cw => 1,
            Rotation::Half => 2,
            Rotation::Ccw => 3,
        }
    }
}

/// A piece's facing, in clockwise quarter turns from its reference pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// All four orientations, clockwise from `Deg0`.
    pub const ALL: [Orientation; 4] = [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];

    /// This orientation advanced by `rotation`.
    ///
    /// ```
    /// use laser_chess::core::{Orientation, Rotation};
    ///
    /// assert_eq!(Orientation::Deg0.rotated(Rotation::Cw), Orientation::Deg90);
    /// assert_eq!(Orientation::Deg0.rotated(Rotation::Ccw), Orientation::Deg270);
    /// assert_eq!(Orientation::Deg270.rotated(Rotation::Cw), Orientation::Deg0);
    /// ```
    #[must_use]
    pub const fn rotated(self, rotation: Rotation) -> Self {
        let index = (self.index() + rotation.quarter_turns()) % 4;
        Self::ALL[index]
    }

    /// The firing direction a LaserSource with this orientation points in.
    ///
    /// `Deg0` is North, advancing clockwise.
    #[must_use]
    pub const fn as_direction(self) -> Direction {
        match self {
            Orientation::Deg0 => Direction::North,
            Orientation::Deg90 => Direction::East,
            Orientation::Deg180 => Direction::South,
            Orientation::Deg270 => Direction::West,
        }
    }

    const fn index(self) -> usize {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 1,
            Orientation::Deg180 => 2,
            Orientation::Deg270 => 3,
        }
    }
}
