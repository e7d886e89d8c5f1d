//! Piece kinds and the reflection table.
//!
//! ## Reflection model
//!
//! Mirrors are described by the compass pair of their reflective faces. A
//! Pyramid in its reference pose (`Deg0`) exposes its mirror to the north
//! and east: a beam travelling South (arriving on the north face) leaves
//! East, and a beam travelling West (arriving on the east face) leaves
//! North. Rotating the piece rotates the pair. A Djed is a full diagonal
//! mirror, reflective on both sides, and is therefore 180°-symmetric.
//!
//! `Piece::reflect` is a pure function of kind and orientation; no piece
//! state beyond those two fields feeds into laser resolution.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::geometry::{Direction, Orientation, Rotation};
use super::player::Player;

/// The kind of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// The piece whose destruction loses the game. Moves one cell, never
    /// rotates, never reflects.
    King,
    /// The fixed origin of a player's laser. Cannot move, rotate, or be
    /// destroyed; its orientation is its firing direction.
    LaserSource,
    /// Single-sided mirror: one reflective diagonal face, rotatable.
    Pyramid,
    /// Double-sided mirror: a full diagonal, reflective from either side.
    Djed,
    /// Non-reflective blocker; absorbs the beam and is destroyed.
    Obelisk,
}

impl PieceKind {
    /// Whether a player may rotate this kind.
    #[must_use]
    pub const fn is_rotatable(self) -> bool {
        matches!(self, PieceKind::Pyramid | PieceKind::Djed)
    }

    /// Whether a player may relocate this kind.
    ///
    /// Everything moves one cell in any compass direction except the
    /// LaserSource, which is fixed for the whole game.
    #[must_use]
    pub const fn is_movable(self) -> bool {
        !matches!(self, PieceKind::LaserSource)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::LaserSource => "LaserSource",
            PieceKind::Pyramid => "Pyramid",
            PieceKind::Djed => "Djed",
            PieceKind::Obelisk => "Obelisk",
        };
        write!(f, "{name}")
    }
}

/// A piece on the board: kind, owner, and facing.
///
/// Orientation is carried for every kind but only consulted for mirrors and
/// the LaserSource's firing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
    pub orientation: Orientation,
}

impl Piece {
    /// Create a piece.
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Player, orientation: Orientation) -> Self {
        Self {
            kind,
            owner,
            orientation,
        }
    }

    /// This piece turned by `rotation`.
    #[must_use]
    pub fn rotated(self, rotation: Rotation) -> Self {
        Self {
            orientation: self.orientation.rotated(rotation),
            ..self
        }
    }

    /// Where a beam travelling in `incoming` leaves this piece, or `None`
    /// if the beam does not hit a reflective face.
    ///
    /// ```
    /// use laser_chess::core::{Direction, Orientation, Piece, PieceKind, Player};
    ///
    /// let pyramid = Piece::new(PieceKind::Pyramid, Player::Red, Orientation::Deg0);
    /// assert_eq!(pyramid.reflect(Direction::South), Some(Direction::East));
    /// assert_eq!(pyramid.reflect(Direction::North), None);
    /// ```
    #[must_use]
    pub fn reflect(&self, incoming: Direction) -> Option<Direction> {
        use Direction::{East, North, South, West};
        use Orientation::{Deg0, Deg180, Deg270, Deg90};

        match self.kind {
            PieceKind::Pyramid => match (self.orientation, incoming) {
                // Faces north + east
                (Deg0, South) => Some(East),
                (Deg0, West) => Some(North),
                // Faces south + east
                (Deg90, North) => Some(East),
                (Deg90, West) => Some(South),
                // Faces south + west
                (Deg180, North) => Some(West),
                (Deg180, East) => Some(South),
                // Faces north + west
                (Deg270, South) => Some(West),
                (Deg270, East) => Some(North),
                _ => None,
            },
            PieceKind::Djed => match (self.orientation, incoming) {
                // The `\` diagonal
                (Deg0 | Deg180, South) => Some(East),
                (Deg0 | Deg180, West) => Some(North),
                (Deg0 | Deg180, North) => Some(West),
                (Deg0 | Deg180, East) => Some(South),
                // The `/` diagonal
                (Deg90 | Deg270, North) => Some(East),
                (Deg90 | Deg270, West) => Some(South),
                (Deg90 | Deg270, South) => Some(West),
                (Deg90 | Deg270, East) => Some(North),
            },
            PieceKind::King | PieceKind::LaserSource | PieceKind::Obelisk => None,
        }
    }

    /// Every `(incoming, outgoing)` pair this piece currently reflects.
    ///
    /// At most two entries for a Pyramid, four for a Djed, none for
    /// everything else.
    #[must_use]
    pub fn reflective_faces(&self) -> SmallVec<[(Direction, Direction); 4]> {
        Direction::ALL
            .into_iter()
            .filter_map(|incoming| self.reflect(incoming).map(|outgoing| (incoming, outgoing)))
            .collect()
    }
}
