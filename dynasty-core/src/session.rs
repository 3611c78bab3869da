//! League session — explicit application state plus a reducer.
//!
//! Ownership and ranking changes invalidate projected pick numbers, so every
//! mutating event re-projects the whole league before `apply` returns.

use crate::domain::{League, PickId, PlayerId, TeamId, Year};
use crate::error::{ProposalError, SessionError};
use crate::proposal::{Side, TradeProposal};
use crate::rankings::{move_team, update_rankings};
use crate::trade::{execute_trade, TradeReport, TradeRequest};
use tracing::debug;

/// User-initiated events the session understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueEvent {
    /// Replace one season's full order.
    ReorderRanking { year: Year, order: Vec<TeamId> },
    /// Drag one entry of a season's order from slot `from` to slot `to`.
    MoveTeam { year: Year, from: usize, to: usize },
    SelectTeam { side: Side, team: TeamId },
    TogglePlayer { side: Side, player: PlayerId },
    TogglePick { side: Side, pick: PickId },
    ExecuteTrade(TradeRequest),
    /// Execute the current proposal and clear its selections.
    ExecuteProposal,
}

#[derive(Debug, Clone)]
pub struct LeagueSession {
    league: League,
    proposal: Option<TradeProposal>,
    last_trade: Option<TradeReport>,
}

impl LeagueSession {
    /// Start a session from a seed. Projections are computed immediately.
    pub fn new(seed: League) -> Self {
        let league = seed.with_projections();
        let proposal = TradeProposal::for_league(&league);
        Self {
            league,
            proposal,
            last_trade: None,
        }
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn into_league(self) -> League {
        self.league
    }

    /// `None` when the league has fewer than two teams.
    pub fn proposal(&self) -> Option<&TradeProposal> {
        self.proposal.as_ref()
    }

    pub fn last_trade(&self) -> Option<&TradeReport> {
        self.last_trade.as_ref()
    }

    pub fn apply(&mut self, event: LeagueEvent) -> Result<(), SessionError> {
        debug!(?event, "applying league event");
        match event {
            LeagueEvent::ReorderRanking { year, order } => {
                self.replace_league(|league| update_rankings(league, year, order));
            }
            LeagueEvent::MoveTeam { year, from, to } => {
                let Some(current) = self.league.ranking(year) else {
                    debug!(year, "no ranking to reorder");
                    return Ok(());
                };
                let order = move_team(&current.order, from, to);
                self.replace_league(|league| update_rankings(league, year, order));
            }
            LeagueEvent::SelectTeam { side, team } => {
                if !self.league.has_team(&team) {
                    return Err(ProposalError::UnknownTeam(team).into());
                }
                self.proposal_mut()?.set_team(side, team)?;
            }
            LeagueEvent::TogglePlayer { side, player } => {
                self.proposal_mut()?.toggle_player(side, player);
            }
            LeagueEvent::TogglePick { side, pick } => {
                self.proposal_mut()?.toggle_pick(side, pick);
            }
            LeagueEvent::ExecuteTrade(request) => self.run_trade(&request),
            LeagueEvent::ExecuteProposal => {
                let proposal = self.proposal_mut()?;
                if !proposal.can_execute() {
                    return Err(ProposalError::NotExecutable.into());
                }
                let request = proposal.to_request();
                proposal.clear();
                self.run_trade(&request);
            }
        }
        Ok(())
    }

    fn proposal_mut(&mut self) -> Result<&mut TradeProposal, ProposalError> {
        self.proposal.as_mut().ok_or(ProposalError::NotExecutable)
    }

    fn run_trade(&mut self, request: &TradeRequest) {
        let mut report = None;
        self.replace_league(|league| {
            let outcome = execute_trade(league, request);
            report = Some(outcome.report);
            outcome.league.with_projections()
        });
        self.last_trade = report;
    }

    fn replace_league(&mut self, f: impl FnOnce(League) -> League) {
        let league = std::mem::take(&mut self.league);
        self.league = f(league);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn projected(league: &League, id: &str) -> Option<u32> {
        league.pick(&PickId::from(id)).unwrap().projected_pick_number
    }

    #[test]
    fn session_starts_projected() {
        let session = LeagueSession::new(seed::demo());
        assert_eq!(projected(session.league(), "dp1"), Some(10));
        let proposal = session.proposal().unwrap();
        assert_eq!(proposal.team(Side::Left), &TeamId::from("warry"));
        assert_eq!(proposal.team(Side::Right), &TeamId::from("shark"));
    }

    #[test]
    fn move_team_reprojects() {
        let mut session = LeagueSession::new(seed::demo());
        session
            .apply(LeagueEvent::MoveTeam { year: 2025, from: 0, to: 2 })
            .unwrap();
        assert_eq!(projected(session.league(), "dp1"), Some(8));
    }

    #[test]
    fn proposal_flow_executes_and_clears() {
        let mut session = LeagueSession::new(seed::demo());
        session
            .apply(LeagueEvent::TogglePick { side: Side::Left, pick: PickId::from("dp1") })
            .unwrap();
        assert_eq!(
            session.apply(LeagueEvent::ExecuteProposal),
            Err(SessionError::Proposal(ProposalError::NotExecutable))
        );

        session
            .apply(LeagueEvent::TogglePlayer { side: Side::Right, player: PlayerId::from("p6") })
            .unwrap();
        session.apply(LeagueEvent::ExecuteProposal).unwrap();

        let league = session.league();
        assert_eq!(league.pick(&PickId::from("dp1")).unwrap().current_team_id, TeamId::from("shark"));
        assert_eq!(league.player(&PlayerId::from("p6")).unwrap().team_id, TeamId::from("warry"));
        // still projected from warry's standing
        assert_eq!(projected(league, "dp1"), Some(10));
        assert!(session.proposal().unwrap().selection(Side::Left).is_empty());
        assert_eq!(session.last_trade().unwrap().moved_count(), 2);
    }

    #[test]
    fn selecting_unknown_team_fails() {
        let mut session = LeagueSession::new(seed::demo());
        let err = session
            .apply(LeagueEvent::SelectTeam { side: Side::Right, team: TeamId::from("jets") })
            .unwrap_err();
        assert_eq!(err, SessionError::Proposal(ProposalError::UnknownTeam(TeamId::from("jets"))));
    }
}
