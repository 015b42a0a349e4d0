//! Per-phase views for a presentation layer.
//!
//! Each view carries exactly what one screen needs. The reveal view hides
//! the role until the reveal gate is open, so a renderer cannot leak it by
//! accident.

use serde::Serialize;

use crate::catalog::CategoryId;
use crate::core::{Identity, Player, PlayerId};

/// What to render for the current phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PhaseView {
    /// Player count and category selection.
    Setup(SetupView),
    /// One player's turn with the device.
    Reveal(RevealCard),
    /// Round in progress.
    Playing(RoundSummary),
}

/// Setup screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetupView {
    /// Current player count.
    pub player_count: usize,
    /// Selected category, if any.
    pub selected_category: Option<CategoryId>,
    /// Whether the start control is enabled.
    pub can_start: bool,
    /// Whether the increment control is enabled.
    pub can_increment: bool,
    /// Whether the decrement control is enabled.
    pub can_decrement: bool,
}

/// A role as shown to its player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RoleView {
    /// The player must bluff.
    Impostor,
    /// The player knows the secret identity.
    Civilian {
        /// The round's secret identity.
        identity: String,
    },
}

impl RoleView {
    fn of(player: &Player) -> Self {
        match &player.identity {
            Identity::Impostor => RoleView::Impostor,
            Identity::Secret(identity) => RoleView::Civilian {
                identity: identity.clone(),
            },
        }
    }
}

/// The current player's reveal screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RevealCard {
    /// Whose turn it is.
    pub player: PlayerId,
    /// Whether the reveal gate is open.
    pub revealed: bool,
    /// Whether this is the last player before play starts.
    pub is_last: bool,
    /// The role, present only while the gate is open.
    pub role: Option<RoleView>,
}

impl RevealCard {
    pub(crate) fn new(player: &Player, is_last: bool) -> Self {
        Self {
            player: player.id,
            revealed: player.revealed,
            is_last,
            role: player.revealed.then(|| RoleView::of(player)),
        }
    }
}

/// The in-play screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    /// Number of players at the table.
    pub player_count: usize,
    /// Number of impostors dealt.
    pub impostor_count: usize,
    /// Display name of the category in play.
    pub category_name: String,
}
