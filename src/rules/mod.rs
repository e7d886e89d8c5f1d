//! Game rules: move legality and laser resolution.
//!
//! Both halves are pure functions over a board snapshot: no hidden state,
//! no mutation, callable from any context. The `game` module sequences
//! them into turns.

pub mod laser;
pub mod validate;

pub use laser::{fire, LaserOutcome, LaserPath, LaserStep};
pub use validate::{validate_move, MoveSpec};
