use crate::analysis::participant_stats::ParticipantStats;
use crate::error::AppError;
use colored::*;
use std::io::{self, Write};
use tabled::{settings::Style, Table, Tabled};

const TEAM_SIZE: usize = 5;
const DIVIDER_WIDTH: usize = 150;

#[derive(Tabled)]
struct ParticipantRow {
    summoner: String,
    rank: String,
    winrate: String,
    champion: String,
    #[tabled(rename = "mastery level")]
    mastery_level: u32,
    points: u64,
    #[tabled(rename = "top 5")]
    note: String,
}

impl From<&ParticipantStats> for ParticipantRow {
    fn from(stats: &ParticipantStats) -> Self {
        ParticipantRow {
            summoner: stats.summoner_name.clone(),
            rank: stats.rank.clone(),
            winrate: stats.winrate.to_string(),
            champion: stats.champion_name.clone(),
            mastery_level: stats.mastery.level,
            points: stats.mastery.points,
            note: stats.top_champion_note().unwrap_or_default(),
        }
    }
}

fn team_table(team: &[ParticipantStats]) -> String {
    let rows: Vec<ParticipantRow> = team.iter().map(ParticipantRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Two-team report. Teams are split by position in the match record
/// (first five blue, the rest red), not by team id.
pub fn render_report(stats: &[ParticipantStats]) -> String {
    let (blue, red) = stats.split_at(stats.len().min(TEAM_SIZE));
    for (side, team) in [("blue", blue), ("red", red)] {
        if team.windows(2).any(|pair| pair[0].team_id != pair[1].team_id) {
            tracing::debug!(side, "team ids are mixed within a positional team");
        }
    }

    [
        format!("\n{}", "BLUE TEAM".bold().blue()),
        team_table(blue),
        "_".repeat(DIVIDER_WIDTH),
        format!("\n{}", "RED TEAM".bold().red()),
        team_table(red),
    ]
    .join("\n")
}

pub fn display_report(stats: &[ParticipantStats]) {
    println!("{}\n", render_report(stats));
}

pub fn display_banner() {
    println!("{}\n", "WELCOME TO SIGHTSTONE".bold().cyan());
}

pub fn write_status_error<W: Write>(out: &mut W, error: &AppError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().yellow())
}

pub fn display_status_error(error: &AppError) {
    let _ = write_status_error(&mut io::stdout(), error);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
