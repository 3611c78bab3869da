//! League seeds — TOML league files and the built-in demo league.
//!
//! A league file is four arrays of tables:
//!
//! ```toml
//! [[teams]]
//! id = "warry"
//! name = "Team Warry"
//! color = "bg-red-500"
//!
//! [[players]]
//! id = "p1"
//! name = "Josh Allen"
//! position = "QB"
//! team = "warry"
//!
//! [[picks]]
//! id = "dp1"
//! year = 2026
//! round = 1
//! original_team = "warry"
//! current_team = "warry"
//!
//! [[rankings]]
//! year = 2025
//! order = ["warry", "shark"]
//! ```
//!
//! Seeds are validated strictly on load; a `projected` value in the file is
//! ignored and recomputed by the caller.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{DraftPick, League, Player, Position, RankingData, Team};
use crate::error::{SeedError, ValidationError};

impl League {
    /// Load and validate a league from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        let league = Self::from_toml(&content)?;
        debug!(path = %path.display(), teams = league.teams.len(), "loaded league file");
        Ok(league)
    }

    /// Parse and validate a league from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, SeedError> {
        let mut league: League = toml::from_str(content)?;
        for pick in &mut league.picks {
            pick.projected_pick_number = None;
        }
        league.validate()?;
        if !league.has_projectable_years() {
            warn!("no two consecutive ranking years, pick numbers can't be projected");
        }
        Ok(league)
    }

    pub fn to_toml(&self) -> Result<String, SeedError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the league to `path` as TOML.
    pub fn write_file(&self, path: &Path) -> Result<(), SeedError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Check seed-time invariants: unique ids, every reference resolves,
    /// one ranking per year and each ranking a permutation of the teams.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut team_ids = HashSet::new();
        for team in &self.teams {
            if !team_ids.insert(&team.id) {
                return Err(ValidationError::DuplicateTeam(team.id.clone()));
            }
        }

        let mut player_ids = HashSet::new();
        for player in &self.players {
            if !player_ids.insert(&player.id) {
                return Err(ValidationError::DuplicatePlayer(player.id.clone()));
            }
            if !team_ids.contains(&player.team_id) {
                return Err(ValidationError::UnknownTeam {
                    entity: "player",
                    id: player.id.to_string(),
                    team: player.team_id.clone(),
                });
            }
        }

        let mut pick_ids = HashSet::new();
        for pick in &self.picks {
            if !pick_ids.insert(&pick.id) {
                return Err(ValidationError::DuplicatePick(pick.id.clone()));
            }
            if pick.round == 0 {
                return Err(ValidationError::ZeroRound(pick.id.clone()));
            }
            for team in [&pick.original_team_id, &pick.current_team_id] {
                if !team_ids.contains(team) {
                    return Err(ValidationError::UnknownTeam {
                        entity: "pick",
                        id: pick.id.to_string(),
                        team: team.clone(),
                    });
                }
            }
        }

        let mut years = HashSet::new();
        for ranking in &self.rankings {
            if !years.insert(ranking.year) {
                return Err(ValidationError::DuplicateRankingYear(ranking.year));
            }
            if !ranking.is_permutation_of(self.team_ids()) {
                return Err(ValidationError::NotAPermutation { year: ranking.year });
            }
        }

        Ok(())
    }

    /// Whether some ranking year Y has a Y−1 ranking to project from.
    pub fn has_projectable_years(&self) -> bool {
        let years = self.ranking_years();
        years.windows(2).any(|w| w[1] == w[0] + 1)
    }

    /// The built-in ten-team demo league. See [`demo`].
    pub fn demo() -> Self {
        demo()
    }
}

const DEMO_TEAMS: [(&str, &str, &str); 10] = [
    ("warry", "Team Warry", "bg-red-500"),
    ("shark", "Team Shark", "bg-blue-500"),
    ("eagles", "Team Eagles", "bg-green-500"),
    ("lions", "Team Lions", "bg-purple-500"),
    ("cowboys", "Team Cowboys", "bg-indigo-500"),
    ("chiefs", "Team Chiefs", "bg-yellow-500"),
    ("ravens", "Team Ravens", "bg-gray-500"),
    ("steelers", "Team Steelers", "bg-orange-500"),
    ("packers", "Team Packers", "bg-teal-500"),
    ("bills", "Team Bills", "bg-pink-500"),
];

const DEMO_PLAYERS: [(&str, &str, Position, &str); 40] = [
    ("p1", "Josh Allen", Position::QB, "warry"),
    ("p2", "Christian McCaffrey", Position::RB, "warry"),
    ("p3", "Davante Adams", Position::WR, "warry"),
    ("p4", "Travis Kelce", Position::TE, "warry"),
    ("p5", "Lamar Jackson", Position::QB, "shark"),
    ("p6", "Jameson Williams", Position::WR, "shark"),
    ("p7", "Sam LaPorta", Position::TE, "shark"),
    ("p8", "Derrick Henry", Position::RB, "shark"),
    ("p9", "Jalen Hurts", Position::QB, "eagles"),
    ("p10", "Saquon Barkley", Position::RB, "eagles"),
    ("p11", "A.J. Brown", Position::WR, "eagles"),
    ("p12", "Dallas Goedert", Position::TE, "eagles"),
    ("p13", "Jared Goff", Position::QB, "lions"),
    ("p14", "Jahmyr Gibbs", Position::RB, "lions"),
    ("p15", "Amon-Ra St. Brown", Position::WR, "lions"),
    ("p16", "David Montgomery", Position::RB, "lions"),
    ("p17", "Dak Prescott", Position::QB, "cowboys"),
    ("p18", "CeeDee Lamb", Position::WR, "cowboys"),
    ("p19", "Ezekiel Elliott", Position::RB, "cowboys"),
    ("p20", "Jake Ferguson", Position::TE, "cowboys"),
    ("p21", "Patrick Mahomes", Position::QB, "chiefs"),
    ("p22", "Tyreek Hill", Position::WR, "chiefs"),
    ("p23", "Kareem Hunt", Position::RB, "chiefs"),
    ("p24", "Noah Gray", Position::TE, "chiefs"),
    ("p25", "Joe Burrow", Position::QB, "ravens"),
    ("p26", "Ja'Marr Chase", Position::WR, "ravens"),
    ("p27", "Joe Mixon", Position::RB, "ravens"),
    ("p28", "Tee Higgins", Position::WR, "ravens"),
    ("p29", "Russell Wilson", Position::QB, "steelers"),
    ("p30", "Najee Harris", Position::RB, "steelers"),
    ("p31", "George Pickens", Position::WR, "steelers"),
    ("p32", "Pat Freiermuth", Position::TE, "steelers"),
    ("p33", "Jordan Love", Position::QB, "packers"),
    ("p34", "Josh Jacobs", Position::RB, "packers"),
    ("p35", "Jayden Reed", Position::WR, "packers"),
    ("p36", "Tucker Kraft", Position::TE, "packers"),
    ("p37", "Josh Gordon", Position::WR, "bills"),
    ("p38", "James Cook", Position::RB, "bills"),
    ("p39", "Stefon Diggs", Position::WR, "bills"),
    ("p40", "Dawson Knox", Position::TE, "bills"),
];

/// Built-in demo league: ten teams, four players each, 2026–2027 picks and
/// identical 2025–2027 standings with warry on top.
///
/// Non-default ownership: shark holds warry's 2026 2nd (dp2) and the 2026
/// 1sts of eagles (dp10) and lions (dp11). Ids are dp1–dp57 with dp8 unused.
/// warry and cowboys onward have all six of their own picks; shark has only
/// its 2026 1st and 3rd (dp7, dp9), and eagles and lions five each.
pub fn demo() -> League {
    let teams = DEMO_TEAMS
        .iter()
        .map(|(id, name, color)| Team::new(*id, *name, *color))
        .collect();

    let players = DEMO_PLAYERS
        .iter()
        .map(|(id, name, position, team)| Player::new(*id, *name, *position, *team))
        .collect();

    let mut picks = vec![
        DraftPick::new("dp1", 2026, 1, "warry"),
        DraftPick::acquired("dp2", 2026, 2, "warry", "shark"),
        DraftPick::new("dp3", 2026, 3, "warry"),
        DraftPick::new("dp4", 2027, 1, "warry"),
        DraftPick::new("dp5", 2027, 2, "warry"),
        DraftPick::new("dp6", 2027, 3, "warry"),
        DraftPick::new("dp7", 2026, 1, "shark"),
        DraftPick::new("dp9", 2026, 3, "shark"),
        DraftPick::acquired("dp10", 2026, 1, "eagles", "shark"),
        DraftPick::acquired("dp11", 2026, 1, "lions", "shark"),
        DraftPick::new("dp12", 2026, 2, "eagles"),
        DraftPick::new("dp13", 2026, 3, "eagles"),
        DraftPick::new("dp14", 2027, 1, "eagles"),
        DraftPick::new("dp15", 2027, 2, "eagles"),
        DraftPick::new("dp16", 2027, 3, "eagles"),
        DraftPick::new("dp17", 2026, 2, "lions"),
        DraftPick::new("dp18", 2026, 3, "lions"),
        DraftPick::new("dp19", 2027, 1, "lions"),
        DraftPick::new("dp20", 2027, 2, "lions"),
        DraftPick::new("dp21", 2027, 3, "lions"),
    ];

    // cowboys onward hold their own six picks, dp22..dp57
    let mut next_id = 22;
    for (team, _, _) in DEMO_TEAMS.iter().skip(4) {
        for (year, round) in [(2026, 1), (2026, 2), (2026, 3), (2027, 1), (2027, 2), (2027, 3)] {
            picks.push(DraftPick::new(format!("dp{next_id}"), year, round, *team));
            next_id += 1;
        }
    }

    let order: Vec<&str> = DEMO_TEAMS.iter().map(|(id, _, _)| *id).collect();
    let rankings = (2025..=2027)
        .map(|year| RankingData::new(year, order.iter().copied()))
        .collect();

    League {
        teams,
        players,
        picks,
        rankings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PickId, TeamId};

    #[test]
    fn demo_is_valid() {
        let league = demo();
        assert_eq!(league.teams.len(), 10);
        assert_eq!(league.players.len(), 40);
        assert_eq!(league.picks.len(), 56);
        assert!(league.validate().is_ok());
        assert!(league.has_projectable_years());
    }

    #[test]
    fn demo_last_pick_is_bills_2027_third() {
        let league = demo();
        let pick = league.pick(&PickId::from("dp57")).unwrap();
        assert_eq!(pick.original_team_id, TeamId::from("bills"));
        assert_eq!((pick.year, pick.round), (2027, 3));
    }

    #[test]
    fn toml_roundtrip_preserves_league() {
        let league = demo();
        let text = league.to_toml().unwrap();
        let back = League::from_toml(&text).unwrap();
        assert_eq!(back, league);
    }

    #[test]
    fn projected_values_in_file_are_discarded() {
        let text = r#"
[[teams]]
id = "a"
name = "A"
color = "bg-red-500"

[[picks]]
id = "dp1"
year = 2026
round = 1
original_team = "a"
current_team = "a"
projected = 99
"#;
        let league = League::from_toml(text).unwrap();
        assert_eq!(league.picks[0].projected_pick_number, None);
    }

    #[test]
    fn unknown_pick_owner_is_rejected() {
        let text = r#"
[[teams]]
id = "a"
name = "A"
color = "bg-red-500"

[[picks]]
id = "dp1"
year = 2026
round = 1
original_team = "a"
current_team = "zzz"
"#;
        let err = League::from_toml(text).unwrap_err();
        assert!(matches!(
            err,
            SeedError::Invalid(ValidationError::UnknownTeam { entity: "pick", .. })
        ));
    }

    #[test]
    fn non_permutation_ranking_is_rejected() {
        let mut league = demo();
        league.rankings[0].order.pop();
        assert_eq!(
            league.validate(),
            Err(ValidationError::NotAPermutation { year: 2025 })
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut league = demo();
        league.players.push(league.players[0].clone());
        assert_eq!(
            league.validate(),
            Err(ValidationError::DuplicatePlayer(league.players[0].id.clone()))
        );

        let mut league = demo();
        league.rankings.push(league.rankings[0].clone());
        assert_eq!(league.validate(), Err(ValidationError::DuplicateRankingYear(2025)));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        assert!(matches!(League::from_toml("teams = 3"), Err(SeedError::Parse(_))));
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("league.toml");
        demo().write_file(&path).unwrap();
        assert_eq!(League::from_file(&path).unwrap(), demo());
    }
}
