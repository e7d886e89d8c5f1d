//! Game state, turn state machine, and the controller.
//!
//! ## Turn sequencing
//!
//! One call to [`Game::apply_move`] drives a full turn through the phase
//! machine: `AwaitingMove → Resolving → AwaitingMove | GameOver`. The
//! controller validates, commits the board mutation, verifies the board
//! invariants, fires the laser, commits the outcome, and only then hands
//! the turn over. An illegal move returns its reason and leaves every field
//! untouched; an [`EngineFault`] freezes the instance permanently.
//!
//! ## Ownership
//!
//! Each game instance exclusively owns its [`GameState`]. Nothing here is
//! shared or locked: a server hosting many games holds one instance per
//! game and serializes commands per instance. Spectators take cheap
//! [`GameState`] clones (the move history is a persistent vector) after a
//! turn fully resolves.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{initial_board, Board, PieceKind, Player};
use crate::error::{EngineError, EngineFault, IllegalMove};
use crate::rules::{fire, validate_move, LaserOutcome, LaserPath, MoveSpec};
use crate::snapshot::StateSnapshot;

/// Where the turn machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the named player's move.
    AwaitingMove(Player),
    /// A validated move was applied and the laser is being resolved.
    /// Transient: visible only from within a turn.
    Resolving,
    /// The named player has won. Terminal.
    GameOver(Player),
    /// An engine invariant broke; the instance is frozen. Terminal.
    Faulted,
}

/// The observable progress of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Faulted,
}

/// A fully applied move, as kept in the history for replay and audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,
    /// The move they made.
    pub spec: MoveSpec,
    /// Turn number the move was made on.
    pub turn: u32,
    /// How the laser resolved after the move.
    pub outcome: LaserOutcome,
}

/// The canonical state of one game instance.
///
/// Mutated only by [`Game`]; clones are cheap enough for per-turn spectator
/// snapshots (the history is an `im::Vector`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    turn_number: u32,
    phase: GamePhase,
    history: Vector<MoveRecord>,
    last_laser: Option<LaserPath>,
}

impl GameState {
    /// A fresh game on the built-in starting layout, Red to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(initial_board(), Player::Red)
    }

    /// A game starting from an arbitrary board position.
    #[must_use]
    pub fn with_board(board: Board, first_player: Player) -> Self {
        Self {
            board,
            current_player: first_player,
            turn_number: 1,
            phase: GamePhase::AwaitingMove(first_player),
            history: Vector::new(),
            last_laser: None,
        }
    }

    /// The board as of the last fully resolved turn.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The turn machine's phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The derived status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.phase {
            GamePhase::AwaitingMove(_) | GamePhase::Resolving => GameStatus::InProgress,
            GamePhase::GameOver(winner) => GameStatus::Won(winner),
            GamePhase::Faulted => GameStatus::Faulted,
        }
    }

    /// Every applied move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The laser trace of the last resolved turn.
    #[must_use]
    pub fn last_laser(&self) -> Option<&LaserPath> {
        self.last_laser.as_ref()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The game controller: the single owner and mutator of a [`GameState`].
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Start a game on the built-in layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Start a game from an arbitrary position.
    #[must_use]
    pub fn with_board(board: Board, first_player: Player) -> Self {
        Self {
            state: GameState::with_board(board, first_player),
        }
    }

    /// Read access to the canonical state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Snapshot of the state after the last fully resolved turn.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.state)
    }

    /// Process one move command: validate, apply, resolve the laser,
    /// check the win condition, and switch the turn.
    ///
    /// On success the returned snapshot reflects the fully resolved turn.
    /// On [`IllegalMove`] the state is untouched and the same player stays
    /// to move. On [`EngineFault`] the instance freezes and refuses all
    /// further commands.
    pub fn apply_move(
        &mut self,
        player: Player,
        spec: MoveSpec,
    ) -> Result<StateSnapshot, EngineError> {
        match self.state.phase {
            GamePhase::AwaitingMove(_) => {}
            GamePhase::GameOver(_) => return Err(IllegalMove::GameAlreadyOver.into()),
            GamePhase::Resolving | GamePhase::Faulted => {
                return Err(EngineFault::InstanceFrozen.into())
            }
        }

        validate_move(&self.state.board, self.state.current_player, player, &spec)
            .map_err(EngineError::Illegal)?;

        if let Err(fault) = verify_board_invariants(&self.state.board) {
            self.state.phase = GamePhase::Faulted;
            return Err(fault.into());
        }

        // Commit the move. Validation makes these infallible; the board
        // rejects without mutating, so a failure is a plain rejection.
        self.state.phase = GamePhase::Resolving;
        let applied = match spec {
            MoveSpec::Relocate { from, to } => self.state.board.relocate(from, to),
            MoveSpec::Rotate { position, delta } => self.state.board.rotate(position, delta),
        };
        if let Err(reason) = applied {
            self.state.phase = GamePhase::AwaitingMove(self.state.current_player);
            return Err(EngineError::Illegal(reason));
        }

        let path = match fire(&self.state.board, player) {
            Ok(path) => path,
            Err(fault) => {
                self.state.phase = GamePhase::Faulted;
                return Err(fault.into());
            }
        };

        let mut winner = None;
        if let Some((position, kind)) = path.outcome.destroyed() {
            let fallen = self
                .state
                .board
                .remove(position)
                .expect("resolver reported a piece at this cell");
            debug_assert_eq!(fallen.kind, kind);
            if kind == PieceKind::King {
                winner = Some(fallen.owner.opponent());
            }
        }

        self.state.history.push_back(MoveRecord {
            player,
            spec,
            turn: self.state.turn_number,
            outcome: path.outcome,
        });
        self.state.last_laser = Some(path);

        match winner {
            Some(winner) => self.state.phase = GamePhase::GameOver(winner),
            None => {
                self.state.turn_number += 1;
                self.state.current_player = self.state.current_player.opponent();
                self.state.phase = GamePhase::AwaitingMove(self.state.current_player);
            }
        }

        Ok(self.snapshot())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the board invariants a valid game can never break: one King and
/// one LaserSource per player, restricted cells occupied only by their
/// owner. Single occupancy is structural (one piece slot per cell).
pub fn verify_board_invariants(board: &Board) -> Result<(), EngineFault> {
    for player in Player::both() {
        let kings = board.count_pieces(player, PieceKind::King);
        if kings != 1 {
            return Err(EngineFault::KingInvariant {
                player,
                count: kings,
            });
        }
        let sources = board.count_pieces(player, PieceKind::LaserSource);
        if sources != 1 {
            return Err(EngineFault::SourceInvariant {
                player,
                count: sources,
            });
        }
    }
    for (position, cell) in board.cells() {
        if let Some(piece) = cell.piece {
            if !cell.terrain.admits(piece.owner) {
                return Err(EngineFault::RestrictedCellViolation(position));
            }
        }
    }
    Ok(())
}
