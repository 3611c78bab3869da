//! DraftPick — a future draft slot with provenance and current ownership.

use super::ids::{PickId, TeamId};
use serde::{Deserialize, Serialize};

/// Draft season year.
pub type Year = i32;

/// A draft pick.
///
/// `original_team_id` records who the pick was allotted to and never changes.
/// `current_team_id` is who may use or trade it now. `projected_pick_number`
/// is derived from rankings and is overwritten on every projection pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPick {
    pub id: PickId,
    pub year: Year,
    /// 1-based round.
    pub round: u32,
    #[serde(rename = "original_team")]
    pub original_team_id: TeamId,
    #[serde(rename = "current_team")]
    pub current_team_id: TeamId,
    #[serde(rename = "projected", default, skip_serializing_if = "Option::is_none")]
    pub projected_pick_number: Option<u32>,
}

impl DraftPick {
    /// A pick still held by the team it was allotted to.
    pub fn new(id: impl Into<String>, year: Year, round: u32, team: impl Into<String>) -> Self {
        let team = TeamId::new(team);
        Self {
            id: PickId::new(id),
            year,
            round,
            original_team_id: team.clone(),
            current_team_id: team,
            projected_pick_number: None,
        }
    }

    /// Same as [`DraftPick::new`] but already held by another team.
    pub fn acquired(
        id: impl Into<String>,
        year: Year,
        round: u32,
        original: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self {
            current_team_id: TeamId::new(current),
            ..Self::new(id, year, round, original)
        }
    }

    pub fn is_traded(&self) -> bool {
        self.original_team_id != self.current_team_id
    }

    /// Projected number for display, `TBD` when it can't be computed.
    pub fn pick_label(&self) -> String {
        match self.projected_pick_number {
            Some(n) => n.to_string(),
            None => "TBD".to_string(),
        }
    }

    /// Sort key used by per-team pick lists: unset projections sort as 0.
    pub(crate) fn owner_sort_key(&self) -> (Year, u32, u32) {
        (self.year, self.round, self.projected_pick_number.unwrap_or(0))
    }
}
