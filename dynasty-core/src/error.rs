//! Error types for the fallible edges: seed loading and trade proposals.
//!
//! Projection, trade execution and ranking updates never fail; they skip or
//! leave unset what they cannot resolve.

use crate::domain::{PickId, PlayerId, TeamId, Year};
use thiserror::Error;

/// Errors loading or writing a league seed.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("read league file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse league TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize league TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid league: {0}")]
    Invalid(#[from] ValidationError),
}

/// Structural problems in a seeded league.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate team id '{0}'")]
    DuplicateTeam(TeamId),
    #[error("duplicate player id '{0}'")]
    DuplicatePlayer(PlayerId),
    #[error("duplicate pick id '{0}'")]
    DuplicatePick(PickId),
    #[error("{entity} '{id}' references unknown team '{team}'")]
    UnknownTeam {
        entity: &'static str,
        id: String,
        team: TeamId,
    },
    #[error("more than one ranking for {0}")]
    DuplicateRankingYear(Year),
    #[error("ranking for {year} is not a permutation of the league's teams")]
    NotAPermutation { year: Year },
    #[error("pick '{0}' has round 0 (rounds are 1-based)")]
    ZeroRound(PickId),
}

/// Misuse of a [`crate::proposal::TradeProposal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProposalError {
    #[error("both sides of a trade can't be '{0}'")]
    SameTeam(TeamId),
    #[error("unknown team '{0}'")]
    UnknownTeam(TeamId),
    #[error("trade needs at least one asset on each side")]
    NotExecutable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("proposal error: {0}")]
    Proposal(#[from] ProposalError),
}
