//! Laser path resolution.
//!
//! ## Algorithm
//!
//! Resolution starts at the firing player's LaserSource and walks one cell
//! at a time in the current travel direction. An empty cell passes the beam
//! through; a mirror face turns it; anything else terminates it. The walk
//! carries no state between turns; every resolution reads only the board
//! it is given, so resolving the same snapshot twice yields the same path.
//!
//! The resolver never mutates the board. A destroyed piece is reported in
//! the outcome and removed by the game controller, which is the only
//! component allowed to commit state changes.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Direction, PieceKind, Player, Position};
use crate::error::EngineFault;

/// One cell the beam touched, with the direction it travelled onward.
///
/// For the terminal cell of an absorbed or destroying beam this is the
/// direction the beam entered with; everywhere else it is the direction the
/// beam left the cell, so the sequence draws as a polyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaserStep {
    pub position: Position,
    pub direction: Direction,
}

/// How a resolution ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaserOutcome {
    /// The beam left the board without hitting anything terminal.
    ExitedBoard,
    /// The beam hit a LaserSource, which soaks it up unharmed.
    Absorbed(Position),
    /// The beam hit a piece on a non-reflective face, destroying it.
    PieceDestroyed { position: Position, kind: PieceKind },
}

impl LaserOutcome {
    /// The destroyed piece's position, if the beam destroyed one.
    #[must_use]
    pub fn destroyed(&self) -> Option<(Position, PieceKind)> {
        match *self {
            LaserOutcome::PieceDestroyed { position, kind } => Some((position, kind)),
            LaserOutcome::ExitedBoard | LaserOutcome::Absorbed(_) => None,
        }
    }
}

/// The full trace of one turn's laser, recomputed fresh each turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaserPath {
    /// Every cell the beam touched, starting at the firing source.
    pub steps: Vec<LaserStep>,
    pub outcome: LaserOutcome,
}

impl LaserPath {
    /// Number of cells the beam touched.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the beam never left its source cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Resolve `player`'s laser against a board snapshot.
///
/// Fails only on broken invariants: a missing source, or a walk exceeding
/// the `2 × (rows + cols)` step budget (geometrically impossible on a valid
/// board, guarded so the loop is provably terminating).
pub fn fire(board: &Board, player: Player) -> Result<LaserPath, EngineFault> {
    let (source_position, source) = board
        .laser_source(player)
        .ok_or(EngineFault::SourceInvariant { player, count: 0 })?;

    let mut direction = source.orientation.as_direction();
    let mut position = source_position;
    let mut steps = vec![LaserStep {
        position,
        direction,
    }];
    let budget = board.step_budget();

    loop {
        let Some(next) = board.step(position, direction) else {
            return Ok(LaserPath {
                steps,
                outcome: LaserOutcome::ExitedBoard,
            });
        };

        // Every branch below records a cell; refuse to grow past the bound.
        if steps.len() == budget {
            return Err(EngineFault::StepBudgetExceeded { limit: budget });
        }

        let Some(piece) = board.piece_at(next) else {
            steps.push(LaserStep {
                position: next,
                direction,
            });
            position = next;
            continue;
        };

        if let Some(outgoing) = piece.reflect(direction) {
            steps.push(LaserStep {
                position: next,
                direction: outgoing,
            });
            position = next;
            direction = outgoing;
            continue;
        }

        // Terminal hit: sources soak the beam, everything else dies.
        steps.push(LaserStep {
            position: next,
            direction,
        });
        let outcome = if piece.kind == PieceKind::LaserSource {
            LaserOutcome::Absorbed(next)
        } else {
            LaserOutcome::PieceDestroyed {
                position: next,
                kind: piece.kind,
            }
        };
        return Ok(LaserPath { steps, outcome });
    }
}
