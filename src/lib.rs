//! # laser-chess
//!
//! Authoritative rules engine for a two-player laser-and-mirrors board
//! game: mirrors on an 8×10 grid, one move or rotation per turn, then a
//! laser fires from the mover's fixed source and bounces along mirror
//! faces until it exits, is absorbed, or destroys a piece. Losing the King
//! loses the game.
//!
//! ## Design Principles
//!
//! 1. **One source of truth**: the engine behaves identically inside a
//!    local process and behind a networked server; clients replay or trust
//!    the same deterministic resolution.
//!
//! 2. **Pure rules**: legality checking and laser resolution are pure
//!    functions over a board snapshot. Only the game controller commits
//!    mutations, and only after a move is accepted and fully resolved.
//!
//! 3. **Typed outcomes**: every rejection is a typed [`IllegalMove`];
//!    broken invariants surface as [`EngineFault`]s that freeze the
//!    instance instead of limping on.
//!
//! ## Architecture
//!
//! A turn flows `server` → `rules::validate` → `core::board` mutation →
//! `rules::laser` → `game` (commit, win check, turn switch) → `snapshot`
//! broadcast. Rendering, input, transport, and persistence are
//! collaborators that consume the snapshot schema; none of them live here.
//!
//! ## Modules
//!
//! - `core`: players, geometry, pieces, the board grid, starting layout
//! - `rules`: move validation and laser path resolution
//! - `game`: game state, turn state machine, controller
//! - `snapshot`: serializable public state for presenters and adapters
//! - `server`: game registry, per-game command queue, wire messages
//! - `error`: the move-rejection and invariant-fault taxonomy

pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod server;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    initial_board, Board, Cell, Direction, Orientation, Piece, PieceKind, Player, Position,
    Rotation, Terrain,
};

pub use crate::error::{EngineError, EngineFault, IllegalMove};

pub use crate::game::{Game, GamePhase, GameState, GameStatus, MoveRecord};

pub use crate::rules::{fire, validate_move, LaserOutcome, LaserPath, LaserStep, MoveSpec};

pub use crate::server::{
    ClientMessage, GameHost, GameId, GameSession, HostError, MoveCommand, ServerMessage,
};

pub use crate::snapshot::{CellSnapshot, PieceSnapshot, StateSnapshot};
