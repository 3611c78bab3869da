//! Trade proposal — the two-sided asset selection behind a mock trade.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{League, PickId, PlayerId, TeamId};
use crate::error::ProposalError;
use crate::trade::{TradeRequest, TradeSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Selected assets for one side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSelection {
    pub players: BTreeSet<PlayerId>,
    pub picks: BTreeSet<PickId>,
}

impl SideSelection {
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.picks.is_empty()
    }

    fn clear(&mut self) {
        self.players.clear();
        self.picks.clear();
    }

    fn to_selection(&self) -> TradeSelection {
        TradeSelection {
            players: self.players.iter().cloned().collect(),
            picks: self.picks.iter().cloned().collect(),
        }
    }
}

/// A trade being assembled: two distinct teams and what each will give.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeProposal {
    left_team: TeamId,
    right_team: TeamId,
    left: SideSelection,
    right: SideSelection,
}

impl TradeProposal {
    pub fn new(left_team: TeamId, right_team: TeamId) -> Result<Self, ProposalError> {
        if left_team == right_team {
            return Err(ProposalError::SameTeam(left_team));
        }
        Ok(Self {
            left_team,
            right_team,
            left: SideSelection::default(),
            right: SideSelection::default(),
        })
    }

    /// Proposal between the league's first two teams, if it has two.
    pub fn for_league(league: &League) -> Option<Self> {
        let mut ids = league.team_ids();
        let left = ids.next()?.clone();
        let right = ids.next()?.clone();
        Self::new(left, right).ok()
    }

    pub fn team(&self, side: Side) -> &TeamId {
        match side {
            Side::Left => &self.left_team,
            Side::Right => &self.right_team,
        }
    }

    pub fn selection(&self, side: Side) -> &SideSelection {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn selection_mut(&mut self, side: Side) -> &mut SideSelection {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Switch the team on one side. Clears that side's selection.
    pub fn set_team(&mut self, side: Side, team: TeamId) -> Result<(), ProposalError> {
        if &team == self.team(side.other()) {
            return Err(ProposalError::SameTeam(team));
        }
        match side {
            Side::Left => self.left_team = team,
            Side::Right => self.right_team = team,
        }
        self.selection_mut(side).clear();
        Ok(())
    }

    /// Add the player if absent, remove it if present. Returns whether it is
    /// now selected.
    pub fn toggle_player(&mut self, side: Side, player: PlayerId) -> bool {
        let players = &mut self.selection_mut(side).players;
        if players.remove(&player) {
            false
        } else {
            players.insert(player)
        }
    }

    pub fn toggle_pick(&mut self, side: Side, pick: PickId) -> bool {
        let picks = &mut self.selection_mut(side).picks;
        if picks.remove(&pick) {
            false
        } else {
            picks.insert(pick)
        }
    }

    /// Both sides must offer something.
    pub fn can_execute(&self) -> bool {
        !self.left.is_empty() && !self.right.is_empty()
    }

    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    pub fn to_request(&self) -> TradeRequest {
        TradeRequest {
            left_team: self.left_team.clone(),
            right_team: self.right_team.clone(),
            left_gives: self.left.to_selection(),
            right_gives: self.right.to_selection(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal() -> TradeProposal {
        TradeProposal::new(TeamId::from("warry"), TeamId::from("shark")).unwrap()
    }

    #[test]
    fn same_team_on_both_sides_is_rejected() {
        assert_eq!(
            TradeProposal::new(TeamId::from("warry"), TeamId::from("warry")),
            Err(ProposalError::SameTeam(TeamId::from("warry")))
        );
        let mut p = proposal();
        assert!(p.set_team(Side::Left, TeamId::from("shark")).is_err());
        assert_eq!(p.team(Side::Left), &TeamId::from("warry"));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut p = proposal();
        assert!(p.toggle_player(Side::Left, PlayerId::from("p1")));
        assert!(p.selection(Side::Left).players.contains(&PlayerId::from("p1")));
        assert!(!p.toggle_player(Side::Left, PlayerId::from("p1")));
        assert!(p.selection(Side::Left).is_empty());
    }

    #[test]
    fn needs_assets_on_both_sides() {
        let mut p = proposal();
        p.toggle_pick(Side::Left, PickId::from("dp1"));
        assert!(!p.can_execute());
        p.toggle_player(Side::Right, PlayerId::from("p6"));
        assert!(p.can_execute());
    }

    #[test]
    fn changing_team_clears_only_that_side() {
        let mut p = proposal();
        p.toggle_pick(Side::Left, PickId::from("dp1"));
        p.toggle_player(Side::Right, PlayerId::from("p6"));
        p.set_team(Side::Right, TeamId::from("eagles")).unwrap();
        assert!(p.selection(Side::Right).is_empty());
        assert!(!p.selection(Side::Left).is_empty());
    }

    #[test]
    fn request_mirrors_selection() {
        let mut p = proposal();
        p.toggle_pick(Side::Left, PickId::from("dp1"));
        p.toggle_player(Side::Right, PlayerId::from("p7"));
        p.toggle_player(Side::Right, PlayerId::from("p6"));
        let req = p.to_request();
        assert_eq!(req.left_team, TeamId::from("warry"));
        assert_eq!(req.left_gives.picks, vec![PickId::from("dp1")]);
        assert_eq!(req.right_gives.players, vec![PlayerId::from("p6"), PlayerId::from("p7")]);
    }
}
