//! Core board-and-piece model: players, geometry, pieces, the grid, and
//! the built-in starting layout.
//!
//! Everything here is structural. Rule-level legality and laser resolution
//! build on these types from the `rules` module.

pub mod board;
pub mod geometry;
pub mod layout;
pub mod piece;
pub mod player;

pub use board::{Board, Cell, Terrain, STANDARD_COLS, STANDARD_ROWS};
pub use geometry::{Direction, Orientation, Position, Rotation};
pub use layout::{initial_board, initial_pieces};
pub use piece::{Piece, PieceKind};
pub use player::Player;
