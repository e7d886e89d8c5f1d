//! Serializable state snapshots for presenters and the network adapter.
//!
//! A snapshot is the engine's whole public view: every cell in row-major
//! order, whose turn it is, the status, and the last turn's laser trace so
//! a presenter can draw the beam without re-running resolution. Snapshots
//! are plain data: taking one never blocks the instance beyond reading a
//! consistent state, and consuming one cannot touch the engine.

use serde::{Deserialize, Serialize};

use crate::core::{Orientation, PieceKind, Player, Position, Terrain};
use crate::game::{GameState, GameStatus};
use crate::rules::LaserStep;

/// A piece as exported in a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub owner: Player,
    pub orientation: Orientation,
}

/// One exported cell: position, terrain, and occupant if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub position: Position,
    pub terrain: Terrain,
    pub piece: Option<PieceSnapshot>,
}

/// The full public state after the last fully resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Board height in rows.
    pub rows: u8,
    /// Board width in columns.
    pub cols: u8,
    /// Every cell, row-major.
    pub board_cells: Vec<CellSnapshot>,
    /// The player to move.
    pub current_player: Player,
    /// Turn number, starting at 1.
    pub turn_number: u32,
    /// Whether the game is running, won, or frozen.
    pub status: GameStatus,
    /// The last turn's laser trace; empty before the first move.
    pub last_laser_path: Vec<LaserStep>,
}

impl StateSnapshot {
    /// Capture a game state into an owned, serializable snapshot.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let board = state.board();
        let board_cells = board
            .cells()
            .map(|(position, cell)| CellSnapshot {
                position,
                terrain: cell.terrain,
                piece: cell.piece.map(|piece| PieceSnapshot {
                    kind: piece.kind,
                    owner: piece.owner,
                    orientation: piece.orientation,
                }),
            })
            .collect();

        Self {
            rows: board.rows(),
            cols: board.cols(),
            board_cells,
            current_player: state.current_player(),
            turn_number: state.turn_number(),
            status: state.status(),
            last_laser_path: state
                .last_laser()
                .map(|path| path.steps.clone())
                .unwrap_or_default(),
        }
    }

    /// The exported cell at `position`, if on the board.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&CellSnapshot> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        let index = position.row as usize * self.cols as usize + position.col as usize;
        self.board_cells.get(index)
    }
}
