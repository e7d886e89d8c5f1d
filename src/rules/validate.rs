//! Move specifications and legality checking.
//!
//! Validation is pure: it reads the board and the player to move, and
//! returns either `Ok(())` or the first applicable [`IllegalMove`] reason,
//! never a silent no-op and never a partial mutation. The game controller
//! rejects moves against finished games before the validator runs.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, Position, Rotation};
use crate::error::IllegalMove;

/// A candidate move: relocate a piece one cell, or turn it in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSpec {
    /// Move the piece at `from` to the adjacent cell `to`.
    Relocate { from: Position, to: Position },
    /// Rotate the piece at `position` by `delta`.
    Rotate { position: Position, delta: Rotation },
}

impl MoveSpec {
    /// The cell holding the acting piece.
    #[must_use]
    pub fn origin(&self) -> Position {
        match *self {
            MoveSpec::Relocate { from, .. } => from,
            MoveSpec::Rotate { position, .. } => position,
        }
    }
}

impl std::fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveSpec::Relocate { from, to } => write!(f, "{from} -> {to}"),
            MoveSpec::Rotate { position, delta } => write!(f, "{position} {delta:?}"),
        }
    }
}

/// Check a candidate move by `player` against the board.
///
/// `to_move` is the player whose turn it is. The checks run in a fixed
/// order so a given bad move always reports the same reason.
pub fn validate_move(
    board: &Board,
    to_move: Player,
    player: Player,
    spec: &MoveSpec,
) -> Result<(), IllegalMove> {
    if player != to_move {
        return Err(IllegalMove::NotYourTurn(player));
    }

    match *spec {
        MoveSpec::Relocate { from, to } => {
            if !board.contains(from) {
                return Err(IllegalMove::OutOfBounds(from));
            }
            if !board.contains(to) {
                return Err(IllegalMove::OutOfBounds(to));
            }
            let piece = board
                .piece_at(from)
                .ok_or(IllegalMove::NoPieceAtSource(from))?;
            if piece.owner != player {
                return Err(IllegalMove::NotOwner(from));
            }
            if !piece.kind.is_movable() {
                return Err(IllegalMove::PieceNotMovable(piece.kind));
            }
            if from.king_distance(to) != 1 {
                return Err(IllegalMove::TooFar { from, to });
            }
            if board.piece_at(to).is_some() {
                return Err(IllegalMove::CellOccupied(to));
            }
            let terrain = board
                .terrain(to)
                .ok_or(IllegalMove::OutOfBounds(to))?;
            if !terrain.admits(player) {
                return Err(IllegalMove::SquareForbidden(to));
            }
            Ok(())
        }
        MoveSpec::Rotate { position, .. } => {
            if !board.contains(position) {
                return Err(IllegalMove::OutOfBounds(position));
            }
            let piece = board
                .piece_at(position)
                .ok_or(IllegalMove::NoPieceAtSource(position))?;
            if piece.owner != player {
                return Err(IllegalMove::NotOwner(position));
            }
            if !piece.kind.is_rotatable() {
                return Err(IllegalMove::NotRotatable(piece.kind));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{initial_board, Orientation, Piece, PieceKind};

    fn relocate(from: Position, to: Position) -> MoveSpec {
        MoveSpec::Relocate { from, to }
    }

    #[test]
    fn test_legal_relocation() {
        let board = initial_board();
        // Red pyramid at (6,4) slides one cell west.
        let spec = relocate(Position::new(6, 4), Position::new(6, 3));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Ok(())
        );
    }

    #[test]
    fn test_legal_diagonal_relocation() {
        let board = initial_board();
        let spec = relocate(Position::new(6, 4), Position::new(5, 3));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Ok(())
        );
    }

    #[test]
    fn test_not_your_turn() {
        let board = initial_board();
        let spec = relocate(Position::new(6, 6), Position::new(6, 7));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Silver, &spec),
            Err(IllegalMove::NotYourTurn(Player::Silver))
        );
    }

    #[test]
    fn test_no_piece_at_source() {
        let board = initial_board();
        let spec = relocate(Position::new(4, 4), Position::new(4, 5));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Err(IllegalMove::NoPieceAtSource(Position::new(4, 4)))
        );
    }

    #[test]
    fn test_not_owner() {
        let board = initial_board();
        // (6,6) holds a Silver pyramid.
        let spec = relocate(Position::new(6, 6), Position::new(6, 7));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Err(IllegalMove::NotOwner(Position::new(6, 6)))
        );
    }

    #[test]
    fn test_source_cannot_relocate() {
        let board = initial_board();
        let spec = relocate(Position::new(7, 9), Position::new(6, 9));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Err(IllegalMove::PieceNotMovable(PieceKind::LaserSource))
        );
    }

    #[test]
    fn test_relocation_must_be_adjacent() {
        let board = initial_board();
        let spec = relocate(Position::new(6, 4), Position::new(4, 4));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Err(IllegalMove::TooFar {
                from: Position::new(6, 4),
                to: Position::new(4, 4),
            })
        );
        // Zero-distance counts as not adjacent, not as self-capture.
        let stay = relocate(Position::new(6, 4), Position::new(6, 4));
        assert!(matches!(
            validate_move(&board, Player::Red, Player::Red, &stay),
            Err(IllegalMove::TooFar { .. })
        ));
    }

    #[test]
    fn test_own_piece_blocks_move() {
        let board = initial_board();
        // Red king at (0,5) onto Red obelisk at (0,4).
        let spec = relocate(Position::new(0, 5), Position::new(0, 4));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Err(IllegalMove::CellOccupied(Position::new(0, 4)))
        );
    }

    #[test]
    fn test_enemy_piece_blocks_move_too() {
        let mut board = initial_board();
        board
            .place(
                Piece::new(PieceKind::Obelisk, Player::Silver, Orientation::Deg0),
                Position::new(6, 3),
            )
            .unwrap();
        let spec = relocate(Position::new(6, 4), Position::new(6, 3));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Err(IllegalMove::CellOccupied(Position::new(6, 3)))
        );
    }

    #[test]
    fn test_restricted_file_is_forbidden() {
        let mut board = initial_board();
        // A Red pyramid one step from Silver's file.
        board
            .place(
                Piece::new(PieceKind::Pyramid, Player::Red, Orientation::Deg0),
                Position::new(4, 1),
            )
            .unwrap();
        let spec = relocate(Position::new(4, 1), Position::new(4, 0));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Err(IllegalMove::SquareForbidden(Position::new(4, 0)))
        );
    }

    #[test]
    fn test_out_of_bounds_target() {
        let board = initial_board();
        let spec = relocate(Position::new(0, 5), Position::new(0, 10));
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Err(IllegalMove::OutOfBounds(Position::new(0, 10)))
        );
    }

    #[test]
    fn test_rotate_mirror_is_legal() {
        let board = initial_board();
        for delta in [Rotation::Cw, Rotation::Ccw, Rotation::Half] {
            let spec = MoveSpec::Rotate {
                position: Position::new(6, 4),
                delta,
            };
            assert_eq!(
                validate_move(&board, Player::Red, Player::Red, &spec),
                Ok(())
            );
        }
    }

    #[test]
    fn test_rotate_source_fails() {
        let board = initial_board();
        let spec = MoveSpec::Rotate {
            position: Position::new(7, 9),
            delta: Rotation::Cw,
        };
        assert_eq!(
            validate_move(&board, Player::Red, Player::Red, &spec),
            Err(IllegalMove::NotRotatable(PieceKind::LaserSource))
        );
    }

    #[test]
    fn test_rotate_king_and_obelisk_fail() {
        let board = initial_board();
        for (position, kind) in [
            (Position::new(0, 5), PieceKind::King),
            (Position::new(0, 4), PieceKind::Obelisk),
        ] {
            let spec = MoveSpec::Rotate {
                position,
                delta: Rotation::Ccw,
            };
            assert_eq!(
                validate_move(&board, Player::Red, Player::Red, &spec),
                Err(IllegalMove::NotRotatable(kind))
            );
        }
    }

    #[test]
    fn test_king_single_step_any_direction() {
        let mut board = Board::standard();
        board
            .place(
                Piece::new(PieceKind::King, Player::Red, Orientation::Deg0),
                Position::new(4, 4),
            )
            .unwrap();

        for row in 3..=5u8 {
            for col in 3..=5u8 {
                let to = Position::new(row, col);
                let spec = relocate(Position::new(4, 4), to);
                let result = validate_move(&board, Player::Red, Player::Red, &spec);
                if to == Position::new(4, 4) {
                    assert!(matches!(result, Err(IllegalMove::TooFar { .. })));
                } else {
                    assert_eq!(result, Ok(()));
                }
            }
        }
    }

    #[test]
    fn test_serialization() {
        let spec = MoveSpec::Rotate {
            position: Position::new(2, 6),
            delta: Rotation::Half,
        };
        let json = serde_json::to_string(&spec).unwrap();
        let deserialized: MoveSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, deserialized);
    }
}
