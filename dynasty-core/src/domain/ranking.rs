//! RankingData — one season's standings, best to worst.

use super::ids::TeamId;
use super::pick::Year;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingData {
    pub year: Year,
    /// Team ids from 1st place to last place.
    pub order: Vec<TeamId>,
}

impl RankingData {
    pub fn new(year: Year, order: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            year,
            order: order.into_iter().map(TeamId::new).collect(),
        }
    }

    /// 0-based position of `team`, first occurrence wins.
    pub fn position_of(&self, team: &TeamId) -> Option<usize> {
        self.order.iter().position(|t| t == team)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `order` contains every id in `teams` exactly once and nothing else.
    pub fn is_permutation_of<'a>(&self, teams: impl IntoIterator<Item = &'a TeamId>) -> bool {
        let expected: HashSet<&TeamId> = teams.into_iter().collect();
        let mut seen = HashSet::with_capacity(self.order.len());
        for team in &self.order {
            if !expected.contains(team) || !seen.insert(team) {
                return false;
            }
        }
        seen.len() == expected.len()
    }
}

/// First ranking for `year`, if any.
pub fn ranking_for(rankings: &[RankingData], year: Year) -> Option<&RankingData> {
    rankings.iter().find(|r| r.year == year)
}
