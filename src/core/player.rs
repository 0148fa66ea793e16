//! Player identification and per-player data storage.
//!
//! ## PlayerTurn
//!
//! The game is strictly two-player, so players are a closed enum with an
//! `opponent()` relation rather than an open index.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerTurn`. Cheap to clone when the
//! stored values are persistent (`im`) structures.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerTurn {
    Player1,
    Player2,
}

impl PlayerTurn {
    /// Both players in seating order.
    pub const ALL: [PlayerTurn; 2] = [PlayerTurn::Player1, PlayerTurn::Player2];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerTurn::Player1 => PlayerTurn::Player2,
            PlayerTurn::Player2 => PlayerTurn::Player1,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerTurn::Player1 => 0,
            PlayerTurn::Player2 => 1,
        }
    }
}

impl std::fmt::Display for PlayerTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{PlayerMap, PlayerTurn};
///
/// let mut coins: PlayerMap<u32> = PlayerMap::with_value(7);
/// coins[PlayerTurn::Player2] += 3;
///
/// assert_eq!(coins[PlayerTurn::Player1], 7);
/// assert_eq!(coins[PlayerTurn::Player2], 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerTurn) -> T) -> Self {
        Self {
            data: [factory(PlayerTurn::Player1), factory(PlayerTurn::Player2)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerTurn) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerTurn) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Return a copy with one player's entry replaced.
    #[must_use]
    pub fn with(&self, player: PlayerTurn, value: T) -> Self
    where
        T: Clone,
    {
        let mut next = self.clone();
        next.data[player.index()] = value;
        next
    }

    /// Iterate over (PlayerTurn, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerTurn, &T)> {
        PlayerTurn::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerTurn> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerTurn) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerTurn> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerTurn) -> &mut Self::Output {
        self.get_mut(player)
    }
}
