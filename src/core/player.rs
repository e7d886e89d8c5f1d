//! The two players and opponent lookup.
//!
//! A game always has exactly two sides, fixed for its lifetime. Red moves
//! first in the standard layout.

use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Silver,
}

impl Player {
    /// The other side.
    ///
    /// ```
    /// use laser_chess::core::Player;
    ///
    /// assert_eq!(Player::Red.opponent(), Player::Silver);
    /// assert_eq!(Player::Silver.opponent(), Player::Red);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Silver,
            Player::Silver => Player::Red,
        }
    }

    /// Both players, Red first.
    #[must_use]
    pub const fn both() -> [Player; 2] {
        [Player::Red, Player::Silver]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Silver => write!(f, "Silver"),
        }
    }
}
