//! Player — a rostered athlete owned by exactly one team.

use super::ids::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Roster position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Owning team. This is the only record of roster membership.
    #[serde(rename = "team")]
    pub team_id: TeamId,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        team_id: impl Into<String>,
    ) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            position,
            team_id: TeamId::new(team_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_uses_uppercase_tags() {
        let json = serde_json::to_string(&Position::DST).unwrap();
        assert_eq!(json, "\"DST\"");
        let back: Position = serde_json::from_str("\"TE\"").unwrap();
        assert_eq!(back, Position::TE);
    }

    #[test]
    fn unknown_position_is_rejected() {
        assert!(serde_json::from_str::<Position>("\"LB\"").is_err());
    }
}
