//! Players and their secret identities.
//!
//! ## PlayerId
//!
//! Seat number in reveal order, 1-based: the first player is `PlayerId(1)`.
//!
//! ## Identity
//!
//! What a player is shown when their reveal gate opens: either the round's
//! secret identity or the impostor sentinel.

use serde::{Deserialize, Serialize};

/// Display string shown in place of an identity for the impostor.
pub const IMPOSTOR_LABEL: &str = "IMPOSTOR";

/// Player identifier, 1-based and stable for the life of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Player ID for the given 0-based reveal position.
    ///
    /// ```
    /// use impostor_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_index(0), PlayerId::new(1));
    /// assert_eq!(PlayerId::from_index(0).index(), 0);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// 0-based reveal position of this player.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.saturating_sub(1) as usize
    }

    /// Iterate over all player IDs for a round with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(PlayerId::from_index)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's identity for the round.
///
/// The impostor sentinel is its own variant, so it never compares equal to a
/// real identity, even one spelled like [`IMPOSTOR_LABEL`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    /// The shared secret identity drawn from the category.
    Secret(String),
    /// The impostor sentinel.
    Impostor,
}

impl Identity {
    /// Display string for this identity.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Identity::Secret(s) => s,
            Identity::Impostor => IMPOSTOR_LABEL,
        }
    }

    /// The secret identity, or `None` for the impostor.
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        match self {
            Identity::Secret(s) => Some(s),
            Identity::Impostor => None,
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Seat number in reveal order.
    pub id: PlayerId,

    /// Whether this player is the impostor. Always matches `identity`.
    pub is_impostor: bool,

    /// The identity this player is shown.
    pub identity: Identity,

    /// Reveal gate: whether this player's role is currently shown.
    pub revealed: bool,
}

impl Player {
    /// Create an unrevealed player holding the secret identity.
    #[must_use]
    pub fn civilian(id: PlayerId, identity: impl Into<String>) -> Self {
        Self {
            id,
            is_impostor: false,
            identity: Identity::Secret(identity.into()),
            revealed: false,
        }
    }

    /// Create an unrevealed impostor.
    #[must_use]
    pub fn impostor(id: PlayerId) -> Self {
        Self {
            id,
            is_impostor: true,
            identity: Identity::Impostor,
            revealed: false,
        }
    }
}
