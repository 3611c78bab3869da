//! Dynasty CLI — inspect a league, re-rank seasons, and run mock trades.
//!
//! Commands:
//! - `show` — every team with its roster and owned picks
//! - `picks` — one team's owned picks
//! - `board` — projected draft order for a year
//! - `rank` / `move` — replace or drag a season's ranking
//! - `trade` — execute a two-team trade
//! - `export` — JSON snapshot or CSV draft board
//!
//! Without `--league` the built-in demo league is used. Nothing is written
//! unless `--write` / `--out` is passed.

mod export;
mod logging;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dynasty_core::domain::{DraftPick, League, PickId, PlayerId, TeamId, Year};
use dynasty_core::{
    LeagueEvent, LeagueSession, TradeReport, TradeRequest, TradeSelection, Transfer,
};
use tracing::{info, warn};

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "dynasty",
    about = "Dynasty league tools — rankings, projected picks and mock trades"
)]
struct Cli {
    /// League TOML file. Defaults to the built-in demo league.
    #[arg(long, global = true)]
    league: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every team's roster and owned picks.
    Show,
    /// Show the picks a team currently owns.
    Picks {
        #[arg(long)]
        team: String,
    },
    /// Projected draft order for one year.
    Board {
        #[arg(long)]
        year: Year,
    },
    /// Replace a season's ranking (best to worst) and re-project picks.
    Rank {
        #[arg(long)]
        year: Year,

        /// Comma-separated team ids, 1st place first.
        #[arg(long, value_delimiter = ',', required = true)]
        order: Vec<String>,

        /// Write the updated league to this TOML file.
        #[arg(long)]
        write: Option<PathBuf>,
    },
    /// Move one team to a new slot in a season's ranking.
    Move {
        #[arg(long)]
        year: Year,

        #[arg(long)]
        team: String,

        /// New 1-based ranking position.
        #[arg(long)]
        to: usize,

        #[arg(long)]
        write: Option<PathBuf>,
    },
    /// Execute a trade between two teams.
    Trade {
        #[arg(long)]
        left: String,

        #[arg(long)]
        right: String,

        /// Player or pick ids the left team gives (comma-separated).
        #[arg(long, value_delimiter = ',')]
        give: Vec<String>,

        /// Player or pick ids the right team gives (comma-separated).
        #[arg(long, value_delimiter = ',')]
        get: Vec<String>,

        #[arg(long)]
        write: Option<PathBuf>,
    },
    /// Export the league as a JSON snapshot or a CSV draft board.
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Restrict the CSV board to one draft year.
        #[arg(long)]
        year: Option<Year>,

        /// Output file. Defaults to stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_format);

    let seed = load_league(cli.league.as_deref())?;
    let mut session = LeagueSession::new(seed);

    match cli.command {
        Commands::Show => {
            print_league(session.league());
            Ok(())
        }
        Commands::Picks { team } => run_picks(session.league(), &TeamId::new(team)),
        Commands::Board { year } => run_board(session.league(), year),
        Commands::Rank { year, order, write } => {
            let order: Vec<TeamId> = order.into_iter().map(TeamId::new).collect();
            run_rank(&mut session, year, order, write.as_deref())
        }
        Commands::Move {
            year,
            team,
            to,
            write,
        } => run_move(&mut session, year, &TeamId::new(team), to, write.as_deref()),
        Commands::Trade {
            left,
            right,
            give,
            get,
            write,
        } => run_trade(&mut session, left, right, &give, &get, write.as_deref()),
        Commands::Export { format, year, out } => {
            run_export(session.league(), format, year, out.as_deref())
        }
    }
}

fn load_league(path: Option<&Path>) -> Result<League> {
    match path {
        Some(path) => League::from_file(path)
            .with_context(|| format!("failed to load league from {}", path.display())),
        None => {
            info!("no --league given, using the demo league");
            Ok(League::demo())
        }
    }
}

fn run_picks(league: &League, team: &TeamId) -> Result<()> {
    let Some(view) = league.team_view(team) else {
        bail!("unknown team '{team}'");
    };
    println!("{}", view.team.name);
    for pick in &view.picks {
        println!("  {}", format_pick(league, pick));
    }
    if view.picks.is_empty() {
        println!("  (no picks)");
    }
    Ok(())
}

fn run_board(league: &League, year: Year) -> Result<()> {
    let board = league.draft_board(year);
    if board.is_empty() {
        bail!("no picks for {year}");
    }
    println!("=== {year} Draft Board ===");
    for pick in board {
        println!(
            "#{:<4} R{} {:<16} owned by {}",
            pick.pick_label(),
            pick.round,
            team_name(league, &pick.original_team_id),
            team_name(league, &pick.current_team_id),
        );
    }
    Ok(())
}

fn run_rank(
    session: &mut LeagueSession,
    year: Year,
    order: Vec<TeamId>,
    write: Option<&Path>,
) -> Result<()> {
    let Some(current) = session.league().ranking(year) else {
        bail!("no ranking for {year}");
    };
    let proposed = dynasty_core::RankingData {
        year,
        order: order.clone(),
    };
    if !proposed.is_permutation_of(session.league().team_ids()) {
        if write.is_some() {
            bail!("the {year} order is not a permutation of the league's teams; refusing to write a league file that would not load");
        }
        warn!(year, "new order is not a permutation of the league's teams; affected picks will show TBD");
    }
    let before = current.clone();

    let previous = session.league().clone();
    session.apply(LeagueEvent::ReorderRanking { year, order })?;
    print_ranking_change(&before, session.league());
    print_projection_changes(&previous, session.league());
    maybe_write(session.league(), write)
}

fn run_move(
    session: &mut LeagueSession,
    year: Year,
    team: &TeamId,
    to: usize,
    write: Option<&Path>,
) -> Result<()> {
    let Some(current) = session.league().ranking(year) else {
        bail!("no ranking for {year}");
    };
    let Some(from) = current.position_of(team) else {
        bail!("team '{team}' is not in the {year} ranking");
    };
    if to == 0 || to > current.len() {
        bail!("position must be between 1 and {}", current.len());
    }
    let before = current.clone();

    let previous = session.league().clone();
    session.apply(LeagueEvent::MoveTeam {
        year,
        from,
        to: to - 1,
    })?;
    print_ranking_change(&before, session.league());
    print_projection_changes(&previous, session.league());
    maybe_write(session.league(), write)
}

fn run_trade(
    session: &mut LeagueSession,
    left: String,
    right: String,
    give: &[String],
    get: &[String],
    write: Option<&Path>,
) -> Result<()> {
    if left == right {
        bail!("a team can't trade with itself");
    }
    let league = session.league();
    for team in [&left, &right] {
        if !league.has_team(&TeamId::new(team.as_str())) {
            bail!("unknown team '{team}'");
        }
    }
    if give.is_empty() && get.is_empty() {
        bail!("nothing to trade: pass --give and/or --get");
    }

    let request = TradeRequest::new(
        left,
        right,
        split_assets(league, give),
        split_assets(league, get),
    );
    session.apply(LeagueEvent::ExecuteTrade(request))?;

    if let Some(report) = session.last_trade() {
        print_trade_report(session.league(), report);
    }
    maybe_write(session.league(), write)
}

fn run_export(
    league: &League,
    format: ExportFormat,
    year: Option<Year>,
    out: Option<&Path>,
) -> Result<()> {
    let text = match format {
        ExportFormat::Json => export::export_json(league)?,
        ExportFormat::Csv => export::export_board_csv(league, year)?,
    };
    match out {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported to: {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Sort raw asset ids into picks and players: ids naming a pick in the
/// league are picks, everything else is taken as a player id.
fn split_assets(league: &League, ids: &[String]) -> TradeSelection {
    let mut selection = TradeSelection::default();
    for id in ids.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let pick = PickId::from(id);
        if league.pick(&pick).is_some() {
            selection.picks.push(pick);
        } else {
            selection.players.push(PlayerId::from(id));
        }
    }
    selection
}

fn maybe_write(league: &League, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        league
            .validate()
            .context("league would not load back, nothing written")?;
        league
            .write_file(path)
            .with_context(|| format!("failed to write league to {}", path.display()))?;
        println!("League written to: {}", path.display());
    }
    Ok(())
}

/// Picks whose projected number differs between two snapshots, as
/// `(pick, before, after)`.
fn projection_changes<'a>(
    before: &League,
    after: &'a League,
) -> Vec<(&'a DraftPick, Option<u32>, Option<u32>)> {
    after
        .picks
        .iter()
        .filter_map(|pick| {
            let old = before.pick(&pick.id).and_then(|p| p.projected_pick_number);
            (old != pick.projected_pick_number).then_some((pick, old, pick.projected_pick_number))
        })
        .collect()
}

fn team_name<'a>(league: &'a League, id: &'a TeamId) -> &'a str {
    league.team(id).map_or(id.as_str(), |t| t.name.as_str())
}

fn format_pick(league: &League, pick: &DraftPick) -> String {
    format!(
        "{} R{} #{} (from {})",
        pick.year,
        pick.round,
        pick.pick_label(),
        team_name(league, &pick.original_team_id)
    )
}

fn label(n: Option<u32>) -> String {
    n.map_or_else(|| "TBD".to_string(), |n| n.to_string())
}

fn print_league(league: &League) {
    for team in &league.teams {
        let Some(view) = league.team_view(&team.id) else {
            continue;
        };
        println!();
        println!("=== {} ({}) ===", team.name, team.id);
        println!("Players:");
        for player in &view.players {
            println!("  {:<4} {} [{}]", player.position, player.name, player.id);
        }
        println!("Draft Picks:");
        for pick in &view.picks {
            println!("  {} [{}]", format_pick(league, pick), pick.id);
        }
    }
    println!();
}

fn print_ranking_change(before: &dynasty_core::RankingData, league: &League) {
    let Some(after) = league.ranking(before.year) else {
        return;
    };
    println!("=== {} Rankings ===", before.year);
    for (i, team) in after.order.iter().enumerate() {
        let was = before
            .position_of(team)
            .map_or_else(|| "new".to_string(), |p| format!("was #{}", p + 1));
        println!("#{:<3} {:<16} ({was})", i + 1, team_name(league, team));
    }
}

fn print_projection_changes(before: &League, after: &League) {
    let changes = projection_changes(before, after);
    if changes.is_empty() {
        println!("No projected pick numbers changed.");
        return;
    }
    println!();
    println!("--- Projected picks changed ---");
    for (pick, old, new) in changes {
        println!(
            "  {} {} R{} ({}): #{} -> #{}",
            pick.id,
            pick.year,
            pick.round,
            team_name(after, &pick.original_team_id),
            label(old),
            label(new),
        );
    }
}

fn print_transfer(league: &League, transfer: &Transfer) {
    println!(
        "{} gives {}:",
        team_name(league, &transfer.from),
        team_name(league, &transfer.to)
    );
    for id in &transfer.players {
        if let Some(player) = league.player(id) {
            println!("  {} ({})", player.name, player.position);
        }
    }
    for id in &transfer.picks {
        if let Some(pick) = league.pick(id) {
            println!("  {}", format_pick(league, pick));
        }
    }
    if transfer.moved_count() == 0 {
        println!("  (nothing)");
    }
    for id in &transfer.skipped_players {
        println!("  skipped player {id}: not on {}'s roster", transfer.from);
    }
    for id in &transfer.skipped_picks {
        println!("  skipped pick {id}: not owned by {}", transfer.from);
    }
}

fn print_trade_report(league: &League, report: &TradeReport) {
    println!();
    println!("=== Trade ===");
    print_transfer(league, &report.left_to_right);
    print_transfer(league, &report.right_to_left);
    if report.is_partial() {
        println!();
        println!("WARNING: partial trade, some assets were not owned by the offering team");
    }
    println!();
}
