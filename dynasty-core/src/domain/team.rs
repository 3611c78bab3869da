//! Team metadata and the derived per-team view.

use super::ids::TeamId;
use super::pick::DraftPick;
use super::player::Player;
use serde::{Deserialize, Serialize};

/// A league member. Rosters and pick lists are not stored here; see
/// [`crate::domain::League::team_view`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Display color tag (e.g. `bg-red-500`).
    pub color: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: TeamId::new(id),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Borrowed view of one team's assets.
#[derive(Debug, Clone)]
pub struct TeamView<'a> {
    pub team: &'a Team,
    pub players: Vec<&'a Player>,
    /// Picks currently owned, sorted by year, round, projected number.
    pub picks: Vec<&'a DraftPick>,
}

impl TeamView<'_> {
    pub fn asset_count(&self) -> usize {
        self.players.len() + self.picks.len()
    }
}
