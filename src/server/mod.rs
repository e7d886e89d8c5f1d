//! The engine boundary consumed by network and presenter collaborators.
//!
//! ## Shape
//!
//! - [`GameHost`]: the per-process registry mapping ids to games, with the
//!   `apply_move` / `snapshot` contract collaborators program against.
//! - [`GameSession`]: a single game behind a FIFO command queue. Inbound
//!   commands for one game must be consumed one at a time, first come
//!   first served; the session is that queue, minus any transport.
//! - [`ClientMessage`] / [`ServerMessage`]: the wire vocabulary between a
//!   client and the authoritative server, with bincode framing helpers.
//!   Sockets, sessions-of-people, and persistence live outside the crate.
//!
//! The engine itself never blocks: a session only ever does synchronous
//! work when its owner asks it to process the next queued command.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Player;
use crate::error::EngineError;
use crate::game::Game;
use crate::rules::MoveSpec;
use crate::snapshot::StateSnapshot;

/// Identifier of one hosted game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// A move command as it arrives from a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommand {
    pub player: Player,
    pub spec: MoveSpec,
}

/// Everything a client may send to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientMessage {
    /// Submit a move for the sender's game.
    Move(MoveCommand),
}

/// Everything the server may send to a client or spectator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ServerMessage {
    /// Sent once when a client joins a game.
    Init {
        assigned: Player,
        opponent_name: String,
        snapshot: StateSnapshot,
    },
    /// Broadcast after a move fully resolves.
    MoveApplied {
        command: MoveCommand,
        snapshot: StateSnapshot,
    },
}

impl ServerMessage {
    /// Encode for the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode from the wire.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl ClientMessage {
    /// Encode for the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode from the wire.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Why the host rejected a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HostError {
    /// The id does not name a hosted game.
    #[error("no game with id {0}")]
    UnknownGame(GameId),
    /// The engine rejected the move or the instance is faulted.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// One game behind its inbound FIFO queue.
///
/// Transports enqueue commands as they arrive from any number of
/// connections; the owner drains them one at a time, so no two commands
/// for the same game ever interleave.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    game: Game,
    inbound: VecDeque<MoveCommand>,
}

impl GameSession {
    /// A session on a fresh game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            inbound: VecDeque::new(),
        }
    }

    /// Read access to the game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Commands waiting to be processed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inbound.len()
    }

    /// Append a command to the queue.
    pub fn enqueue(&mut self, command: MoveCommand) {
        self.inbound.push_back(command);
    }

    /// Process the oldest queued command, if any.
    ///
    /// Returns the command together with its result so the owner can relay
    /// a broadcast or an error to the right client.
    pub fn process_next(&mut self) -> Option<(MoveCommand, Result<StateSnapshot, EngineError>)> {
        let command = self.inbound.pop_front()?;
        let result = self.game.apply_move(command.player, command.spec);
        Some((command, result))
    }

    /// Snapshot after the last fully resolved turn.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        self.game.snapshot()
    }
}

/// The per-process registry of hosted games.
///
/// Each entry is an independent, exclusively owned instance; the host
/// itself holds no cross-game state beyond the id counter.
#[derive(Clone, Debug, Default)]
pub struct GameHost {
    games: FxHashMap<GameId, Game>,
    next_id: u32,
}

impl GameHost {
    /// An empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of hosted games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether no games are hosted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Start a new game on the built-in layout.
    pub fn create_game(&mut self) -> (GameId, StateSnapshot) {
        let id = GameId(self.next_id);
        self.next_id += 1;
        let game = Game::new();
        let snapshot = game.snapshot();
        self.games.insert(id, game);
        (id, snapshot)
    }

    /// Read access to a hosted game.
    #[must_use]
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    /// Apply one move command to a hosted game.
    pub fn apply_move(
        &mut self,
        id: GameId,
        player: Player,
        spec: MoveSpec,
    ) -> Result<StateSnapshot, HostError> {
        let game = self.games.get_mut(&id).ok_or(HostError::UnknownGame(id))?;
        game.apply_move(player, spec).map_err(HostError::Engine)
    }

    /// Snapshot of a hosted game after its last fully resolved turn.
    pub fn snapshot(&self, id: GameId) -> Result<StateSnapshot, HostError> {
        self.games
            .get(&id)
            .map(Game::snapshot)
            .ok_or(HostError::UnknownGame(id))
    }

    /// Drop a finished or abandoned game.
    pub fn remove_game(&mut self, id: GameId) -> Option<Game> {
        self.games.remove(&id)
    }
}
