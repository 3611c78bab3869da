//! Domain types for the dynasty league model

pub mod ids;
pub mod league;
pub mod pick;
pub mod player;
pub mod ranking;
pub mod team;

pub use ids::{PickId, PlayerId, TeamId};
pub use league::League;
pub use pick::{DraftPick, Year};
pub use player::{Player, Position};
pub use ranking::{ranking_for, RankingData};
pub use team::{Team, TeamView};
