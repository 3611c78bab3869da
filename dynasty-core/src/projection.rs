//! Pick-number projection — draft order from the previous season's standings.
//!
//! A pick for draft year Y is projected from the Y−1 ranking of length N,
//! and only when year Y itself has a ranking entry.
//! Worst record picks first, with no snake: round 1 occupies 1..=N, round 2
//! occupies N+1..=2N, and so on. Within a round the team ranked first in Y−1
//! picks last.
//!
//! Projection is a full recomputation. Every pick's projected number is
//! overwritten, and cleared when it cannot be derived (no ranking for Y or
//! Y−1, or the original team is missing from the Y−1 ranking).

use crate::domain::{ranking_for, DraftPick, RankingData};
use tracing::debug;

/// Projected overall pick number for a single pick, or `None` if the pick's
/// own season has no ranking, the previous season's ranking is missing, or
/// that ranking does not list the original team.
pub fn projected_pick_number(pick: &DraftPick, rankings: &[RankingData]) -> Option<u32> {
    ranking_for(rankings, pick.year)?;
    let previous = ranking_for(rankings, pick.year.checked_sub(1)?)?;
    let position = previous.position_of(&pick.original_team_id)?;
    let n = u32::try_from(previous.len()).ok()?;
    let position = u32::try_from(position).ok()?;

    let inverse_position = n - position;
    let round_offset = pick.round.checked_sub(1)?.checked_mul(n)?;
    inverse_position.checked_add(round_offset)
}

/// Recompute projected numbers for every pick.
///
/// Pure: the input slice is untouched and the output has the same picks in
/// the same order. Running it twice yields identical output.
pub fn project_pick_numbers(picks: &[DraftPick], rankings: &[RankingData]) -> Vec<DraftPick> {
    let projected: Vec<DraftPick> = picks
        .iter()
        .map(|pick| DraftPick {
            projected_pick_number: projected_pick_number(pick, rankings),
            ..pick.clone()
        })
        .collect();

    debug!(
        picks = projected.len(),
        unprojected = projected
            .iter()
            .filter(|p| p.projected_pick_number.is_none())
            .count(),
        "projected pick numbers"
    );
    projected
}
