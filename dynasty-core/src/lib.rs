//! Dynasty Core — league model, pick projection, trades, ranking updates.
//!
//! This crate holds the league logic behind the `dynasty` CLI:
//! - Domain types (teams, players, draft picks, season rankings)
//! - Pick-number projection from the previous season's standings
//! - Two-team trade execution with per-asset ownership checks
//! - Ranking replacement and drag-style reordering
//! - Trade proposals and a reducer-style league session
//! - TOML league seeds and the built-in demo league
//!
//! Every operation is a synchronous value-in/value-out transformation over
//! an in-memory [`domain::League`].

pub mod domain;
pub mod error;
pub mod projection;
pub mod proposal;
pub mod rankings;
pub mod seed;
pub mod session;
pub mod trade;

pub use domain::{DraftPick, League, PickId, Player, PlayerId, Position, RankingData, Team, TeamId, Year};
pub use error::{ProposalError, SeedError, SessionError, ValidationError};
pub use projection::{project_pick_numbers, projected_pick_number};
pub use proposal::{Side, TradeProposal};
pub use rankings::{move_team, reorder_by_drag, update_rankings};
pub use session::{LeagueEvent, LeagueSession};
pub use trade::{execute_trade, TradeOutcome, TradeReport, TradeRequest, TradeSelection, Transfer};
