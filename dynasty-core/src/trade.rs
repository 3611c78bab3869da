//! Trade execution — move players and flip pick ownership between two teams.
//!
//! Assets are validated one at a time against the offering side. A player not
//! on the offering roster, or a pick the offering side does not currently own,
//! is skipped and reported; the rest of the trade still goes through.
//! Projected pick numbers are left alone; callers re-project afterwards
//! (see [`crate::session::LeagueSession`]).

use crate::domain::{League, PickId, PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Assets one side puts on the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSelection {
    #[serde(default)]
    pub players: Vec<PlayerId>,
    #[serde(default)]
    pub picks: Vec<PickId>,
}

impl TradeSelection {
    pub fn new(
        players: impl IntoIterator<Item = impl Into<String>>,
        picks: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            players: players.into_iter().map(PlayerId::new).collect(),
            picks: picks.into_iter().map(PickId::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.picks.is_empty()
    }
}

/// A two-team trade: each side gives its selection to the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub left_team: TeamId,
    pub right_team: TeamId,
    pub left_gives: TradeSelection,
    pub right_gives: TradeSelection,
}

impl TradeRequest {
    pub fn new(
        left_team: impl Into<String>,
        right_team: impl Into<String>,
        left_gives: TradeSelection,
        right_gives: TradeSelection,
    ) -> Self {
        Self {
            left_team: TeamId::new(left_team),
            right_team: TeamId::new(right_team),
            left_gives,
            right_gives,
        }
    }

    /// The same trade with sides swapped and each side giving back what it got.
    pub fn reversed(&self) -> Self {
        Self {
            left_team: self.right_team.clone(),
            right_team: self.left_team.clone(),
            left_gives: self.left_gives.clone(),
            right_gives: self.right_gives.clone(),
        }
    }
}

/// What actually moved in one direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: TeamId,
    pub to: TeamId,
    pub players: Vec<PlayerId>,
    pub picks: Vec<PickId>,
    pub skipped_players: Vec<PlayerId>,
    pub skipped_picks: Vec<PickId>,
}

impl Transfer {
    fn new(from: &TeamId, to: &TeamId) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
            ..Self::default()
        }
    }

    pub fn moved_count(&self) -> usize {
        self.players.len() + self.picks.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_players.len() + self.skipped_picks.len()
    }
}

/// Summary of an executed trade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeReport {
    /// False when either team did not resolve and nothing was touched.
    pub executed: bool,
    pub left_to_right: Transfer,
    pub right_to_left: Transfer,
}

impl TradeReport {
    pub fn moved_count(&self) -> usize {
        self.left_to_right.moved_count() + self.right_to_left.moved_count()
    }

    pub fn is_partial(&self) -> bool {
        self.left_to_right.skipped_count() + self.right_to_left.skipped_count() > 0
    }
}

#[derive(Debug, Clone)]
pub struct TradeOutcome {
    pub league: League,
    pub report: TradeReport,
}

/// Execute `request` against `league`, returning the new snapshot.
///
/// If either team id does not resolve, the league comes back unchanged and
/// `report.executed` is false.
pub fn execute_trade(mut league: League, request: &TradeRequest) -> TradeOutcome {
    let left = &request.left_team;
    let right = &request.right_team;

    if !league.has_team(left) || !league.has_team(right) {
        warn!(%left, %right, "trade references an unknown team, nothing moved");
        return TradeOutcome {
            league,
            report: TradeReport::default(),
        };
    }

    let mut left_to_right = Transfer::new(left, right);
    let mut right_to_left = Transfer::new(right, left);

    move_players(&mut league, &request.left_gives.players, &mut left_to_right);
    move_players(&mut league, &request.right_gives.players, &mut right_to_left);

    // Picks are decided against ownership as it stood before the trade, so a
    // pick listed on both sides can't bounce back within one execution.
    let mut left_picks = Vec::new();
    let mut right_picks = Vec::new();
    for (idx, pick) in league.picks.iter().enumerate() {
        if request.left_gives.picks.contains(&pick.id) && &pick.current_team_id == left {
            left_picks.push(idx);
        } else if request.right_gives.picks.contains(&pick.id) && &pick.current_team_id == right {
            right_picks.push(idx);
        }
    }
    flip_picks(&mut league, &left_picks, &mut left_to_right);
    flip_picks(&mut league, &right_picks, &mut right_to_left);
    record_skipped_picks(&request.left_gives.picks, &mut left_to_right);
    record_skipped_picks(&request.right_gives.picks, &mut right_to_left);

    let report = TradeReport {
        executed: true,
        left_to_right,
        right_to_left,
    };
    debug!(
        %left,
        %right,
        moved = report.moved_count(),
        partial = report.is_partial(),
        "trade executed"
    );

    TradeOutcome { league, report }
}

/// Move each listed player off `transfer.from` and onto the end of the
/// `transfer.to` roster.
fn move_players(league: &mut League, ids: &[PlayerId], transfer: &mut Transfer) {
    for id in ids {
        let found = league
            .players
            .iter()
            .position(|p| &p.id == id && p.team_id == transfer.from);
        match found {
            Some(idx) => {
                let mut player = league.players.remove(idx);
                player.team_id = transfer.to.clone();
                league.players.push(player);
                transfer.players.push(id.clone());
            }
            None => {
                debug!(player = %id, team = %transfer.from, "player not on offering roster, skipped");
                transfer.skipped_players.push(id.clone());
            }
        }
    }
}

fn flip_picks(league: &mut League, indices: &[usize], transfer: &mut Transfer) {
    for &idx in indices {
        let pick = &mut league.picks[idx];
        pick.current_team_id = transfer.to.clone();
        transfer.picks.push(pick.id.clone());
    }
}

fn record_skipped_picks(requested: &[PickId], transfer: &mut Transfer) {
    for id in requested {
        if !transfer.picks.contains(id) && !transfer.skipped_picks.contains(id) {
            debug!(pick = %id, team = %transfer.from, "pick not owned by offering team, skipped");
            transfer.skipped_picks.push(id.clone());
        }
    }
}
