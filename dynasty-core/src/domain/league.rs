//! League — flat collections of teams, players, picks and rankings.
//!
//! Players and picks are stored once, keyed by id, and point at their owner.
//! Per-team rosters and pick lists are computed on demand, so a trade only
//! has to touch the owning id and membership can never drift out of sync.

use super::ids::{PickId, PlayerId, TeamId};
use super::pick::{DraftPick, Year};
use super::player::Player;
use super::ranking::RankingData;
use super::team::{Team, TeamView};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub picks: Vec<DraftPick>,
    #[serde(default)]
    pub rankings: Vec<RankingData>,
}

impl League {
    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    pub fn has_team(&self, id: &TeamId) -> bool {
        self.team(id).is_some()
    }

    pub fn team_ids(&self) -> impl Iterator<Item = &TeamId> {
        self.teams.iter().map(|t| &t.id)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn pick(&self, id: &PickId) -> Option<&DraftPick> {
        self.picks.iter().find(|p| &p.id == id)
    }

    /// Players owned by `team`, in roster order.
    pub fn roster(&self, team: &TeamId) -> Vec<&Player> {
        self.players.iter().filter(|p| &p.team_id == team).collect()
    }

    /// Picks currently owned by `team`, sorted by year, round, then projected
    /// number (unset sorts first).
    pub fn picks_owned_by(&self, team: &TeamId) -> Vec<&DraftPick> {
        let mut picks: Vec<&DraftPick> = self
            .picks
            .iter()
            .filter(|p| &p.current_team_id == team)
            .collect();
        picks.sort_by_key(|p| p.owner_sort_key());
        picks
    }

    pub fn team_view(&self, team: &TeamId) -> Option<TeamView<'_>> {
        let t = self.team(team)?;
        Some(TeamView {
            team: t,
            players: self.roster(team),
            picks: self.picks_owned_by(team),
        })
    }

    /// All picks for one draft year in projected order: by round, then
    /// projected number, with unprojected picks at the end of their round.
    pub fn draft_board(&self, year: Year) -> Vec<&DraftPick> {
        let mut picks: Vec<&DraftPick> = self.picks.iter().filter(|p| p.year == year).collect();
        picks.sort_by_key(|p| (p.round, p.projected_pick_number.is_none(), p.projected_pick_number));
        picks
    }

    pub fn ranking(&self, year: Year) -> Option<&RankingData> {
        super::ranking::ranking_for(&self.rankings, year)
    }

    /// Distinct years that have a ranking, ascending.
    pub fn ranking_years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self.rankings.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Distinct draft years that have picks, ascending.
    pub fn draft_years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self.picks.iter().map(|p| p.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Recompute every pick's projected number from the current rankings.
    pub fn with_projections(mut self) -> Self {
        self.picks = crate::projection::project_pick_numbers(&self.picks, &self.rankings);
        self
    }

    /// Deterministic content hash of the whole snapshot.
    ///
    /// Uses BLAKE3 over the canonical JSON encoding, so two snapshots with the
    /// same teams, ownership, rankings and projections hash identically.
    pub fn fingerprint(&self) -> String {
        // Plain structs and vecs with string keys; JSON encoding can't fail.
        let canonical = serde_json::to_vec(self).expect("League serialization failed");
        blake3::hash(&canonical).to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn small_league() -> League {
        League {
            teams: vec![
                Team::new("a", "Team A", "bg-red-500"),
                Team::new("b", "Team B", "bg-blue-500"),
            ],
            players: vec![
                Player::new("p1", "One", Position::QB, "a"),
                Player::new("p2", "Two", Position::RB, "b"),
                Player::new("p3", "Three", Position::WR, "a"),
            ],
            picks: vec![
                DraftPick::new("dp1", 2027, 1, "a"),
                DraftPick::new("dp2", 2026, 2, "a"),
                DraftPick::acquired("dp3", 2026, 1, "b", "a"),
                DraftPick::acquired("dp4", 2026, 1, "a", "b"),
            ],
            rankings: vec![
                RankingData::new(2025, ["a", "b"]),
                RankingData::new(2026, ["b", "a"]),
            ],
        }
    }

    #[test]
    fn roster_is_filtered_by_owner() {
        let league = small_league();
        let names: Vec<&str> = league
            .roster(&TeamId::from("a"))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["One", "Three"]);
    }

    #[test]
    fn owned_picks_are_sorted_by_year_then_round() {
        let league = small_league();
        let ids: Vec<&str> = league
            .picks_owned_by(&TeamId::from("a"))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["dp3", "dp2", "dp1"]);
    }

    #[test]
    fn team_view_combines_roster_and_picks() {
        let league = small_league();
        let view = league.team_view(&TeamId::from("b")).unwrap();
        assert_eq!(view.team.name, "Team B");
        assert_eq!(view.players.len(), 1);
        assert_eq!(view.picks.len(), 1);
        assert_eq!(view.asset_count(), 2);
        assert!(league.team_view(&TeamId::from("zzz")).is_none());
    }

    #[test]
    fn draft_board_orders_by_projection() {
        let league = small_league().with_projections();
        let ids: Vec<&str> = league.draft_board(2026).iter().map(|p| p.id.as_str()).collect();
        // b finished last in 2025 → picks first in each round
        assert_eq!(ids, vec!["dp3", "dp4", "dp2"]);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = small_league();
        let b = small_league();
        assert_eq!(a.fingerprint(), b.fingerprint());
        let projected = small_league().with_projections();
        assert_ne!(a.fingerprint(), projected.fingerprint());
    }

    #[test]
    fn fingerprint_hashes_the_encoded_league() {
        let empty = League::default();
        let encoded = serde_json::to_vec(&empty).unwrap();
        assert_eq!(empty.fingerprint(), blake3::hash(&encoded).to_hex().to_string());
        assert_ne!(empty.fingerprint(), blake3::hash(b"").to_hex().to_string());
    }

    #[test]
    fn year_listings_are_sorted_and_distinct() {
        let league = small_league();
        assert_eq!(league.draft_years(), vec![2026, 2027]);
        assert_eq!(league.ranking_years(), vec![2025]);
    }
}
