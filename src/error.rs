//! Error taxonomy: rejected moves and engine invariant faults.
//!
//! Every rejection is a typed, recoverable value reported to the caller.
//! The only non-recoverable conditions are [`EngineFault`]s, which signal a
//! defect in move application rather than a bad input; a faulted game
//! instance is frozen and refuses further commands.

use thiserror::Error;

use crate::core::{PieceKind, Player, Position};

/// Why a proposed move was rejected.
///
/// A rejected move leaves the game state untouched; the caller may retry
/// with a corrected move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// The game has already been decided.
    #[error("game is already over")]
    GameAlreadyOver,
    /// The acting player is not the player to move.
    #[error("not {0}'s turn")]
    NotYourTurn(Player),
    /// No piece sits at the origin cell.
    #[error("no piece at {0}")]
    NoPieceAtSource(Position),
    /// The piece at the origin belongs to the opponent.
    #[error("piece at {0} belongs to the opponent")]
    NotOwner(Position),
    /// The target cell already holds a piece (own pieces included).
    #[error("cell {0} is occupied")]
    CellOccupied(Position),
    /// The target cell is reserved for the other player.
    #[error("square {0} is forbidden to the mover")]
    SquareForbidden(Position),
    /// A referenced position lies outside the board.
    #[error("position {0} is off the board")]
    OutOfBounds(Position),
    /// The piece kind cannot be rotated.
    #[error("a {0} cannot be rotated")]
    NotRotatable(PieceKind),
    /// The piece kind cannot be relocated.
    #[error("a {0} cannot be moved")]
    PieceNotMovable(PieceKind),
    /// The target cell is not adjacent to the origin.
    #[error("{to} is not adjacent to {from}")]
    TooFar { from: Position, to: Position },
}

/// A broken engine invariant.
///
/// These indicate a defect, not a bad input: either laser resolution failed
/// to terminate inside its geometric bound, or the board was found corrupt
/// before resolution. The owning instance freezes when one surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineFault {
    /// Laser resolution exceeded its step budget.
    #[error("laser resolution exceeded {limit} steps")]
    StepBudgetExceeded { limit: usize },
    /// A live player does not have exactly one King.
    #[error("{player} has {count} kings")]
    KingInvariant { player: Player, count: usize },
    /// A player's LaserSource is missing or duplicated.
    #[error("{player}'s laser source count is {count}")]
    SourceInvariant { player: Player, count: usize },
    /// A restricted cell holds the wrong player's piece.
    #[error("restricted cell {0} holds the wrong player's piece")]
    RestrictedCellViolation(Position),
    /// The instance was frozen by an earlier fault.
    #[error("game instance is frozen after an engine fault")]
    InstanceFrozen,
}

/// Any failure the controller can report for one move command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
    #[error(transparent)]
    Fault(#[from] EngineFault),
}

impl EngineError {
    /// The rejection reason, if this is a recoverable illegal move.
    #[must_use]
    pub fn as_illegal(&self) -> Option<IllegalMove> {
        match self {
            EngineError::Illegal(reason) => Some(*reason),
            EngineError::Fault(_) => None,
        }
    }
}
