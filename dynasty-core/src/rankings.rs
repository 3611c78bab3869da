//! Ranking updates — replace a season's order and re-project every pick.
//!
//! No permutation check happens here. An order that drops a team leaves that
//! team's next-season picks unprojected instead of failing; use
//! [`RankingData::is_permutation_of`] if a caller wants to warn first.

use crate::domain::{League, RankingData, TeamId, Year};
use tracing::debug;

/// Replace the ranking for `year` and recompute all projections.
///
/// If `rankings` has no entry for `year` nothing is replaced, but projections
/// are still recomputed.
pub fn update_rankings(mut league: League, year: Year, new_order: Vec<TeamId>) -> League {
    league.rankings = replace_ranking(&league.rankings, year, new_order);
    league.with_projections()
}

/// Rankings with every entry for `year` replaced by `new_order`.
pub fn replace_ranking(rankings: &[RankingData], year: Year, new_order: Vec<TeamId>) -> Vec<RankingData> {
    let mut replaced = false;
    let updated: Vec<RankingData> = rankings
        .iter()
        .map(|r| {
            if r.year == year {
                replaced = true;
                RankingData {
                    year,
                    order: new_order.clone(),
                }
            } else {
                r.clone()
            }
        })
        .collect();
    if !replaced {
        debug!(year, "no ranking for year, nothing replaced");
    }
    updated
}

/// Move the entry at `from` to `to`, shifting the ones in between.
///
/// Out-of-range indices return the order unchanged.
pub fn move_team(order: &[TeamId], from: usize, to: usize) -> Vec<TeamId> {
    let mut moved = order.to_vec();
    if from >= moved.len() || to >= moved.len() {
        return moved;
    }
    let team = moved.remove(from);
    moved.insert(to, team);
    moved
}

/// Drag-and-drop reorder: drop `active` onto the slot held by `over`.
///
/// Returns `None` when nothing would change (same team, or either id is not
/// in the order).
pub fn reorder_by_drag(order: &[TeamId], active: &TeamId, over: &TeamId) -> Option<Vec<TeamId>> {
    if active == over {
        return None;
    }
    let from = order.iter().position(|t| t == active)?;
    let to = order.iter().position(|t| t == over)?;
    Some(move_team(order, from, to))
}
