//! The built-in starting configuration.
//!
//! Eight pieces per side on the standard 8×10 board. Red holds the top
//! ranks and fires from the bottom-right corner of its restricted file;
//! Silver mirrors from the top-left. Neither opening laser line touches a
//! piece, so the first capture always follows a move.

use super::board::Board;
use super::geometry::{Orientation, Position};
use super::piece::{Piece, PieceKind};
use super::player::Player;

/// The standard board with the initial sixteen pieces placed.
#[must_use]
pub fn initial_board() -> Board {
    let mut board = Board::standard();
    for (piece, position) in initial_pieces() {
        board
            .place(piece, position)
            .expect("built-in layout places every piece on a legal cell");
    }
    board
}

/// The initial piece list, Red first.
#[must_use]
pub fn initial_pieces() -> [(Piece, Position); 16] {
    use Orientation::{Deg0, Deg180, Deg270, Deg90};
    use PieceKind::{Djed, King, LaserSource, Obelisk, Pyramid};
    use Player::{Red, Silver};

    let piece = |kind, owner, orientation| Piece::new(kind, owner, orientation);

    [
        // Red back rank around the king, mirrors forward of it.
        (piece(King, Red, Deg0), Position::new(0, 5)),
        (piece(Obelisk, Red, Deg0), Position::new(0, 4)),
        (piece(Obelisk, Red, Deg0), Position::new(0, 6)),
        (piece(Djed, Red, Deg90), Position::new(0, 7)),
        (piece(Pyramid, Red, Deg180), Position::new(2, 6)),
        (piece(Pyramid, Red, Deg90), Position::new(5, 9)),
        (piece(Pyramid, Red, Deg0), Position::new(6, 4)),
        (piece(LaserSource, Red, Deg0), Position::new(7, 9)),
        // Silver, mirrored.
        (piece(King, Silver, Deg0), Position::new(7, 4)),
        (piece(Obelisk, Silver, Deg0), Position::new(7, 3)),
        (piece(Obelisk, Silver, Deg0), Position::new(7, 5)),
        (piece(Djed, Silver, Deg90), Position::new(7, 2)),
        (piece(Pyramid, Silver, Deg0), Position::new(2, 5)),
        (piece(Pyramid, Silver, Deg90), Position::new(5, 4)),
        (piece(Pyramid, Silver, Deg270), Position::new(6, 6)),
        (piece(LaserSource, Silver, Deg180), Position::new(0, 0)),
    ]
}
