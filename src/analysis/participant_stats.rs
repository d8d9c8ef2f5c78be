use crate::api::models::{ChampionMasteryDto, LeagueEntryDto};
use std::fmt;

pub const UNRANKED: &str = "UNRANKED";

/// How many top-mastery entries count towards [`MasteryStats::top_rank`].
pub const TOP_MASTERY_SLOTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Winrate {
    /// Percentage rounded to one decimal, in [0, 100].
    Percent(f64),
    NotEnoughData,
}

impl Winrate {
    /// Wins and losses are summed across every queue returned.
    pub fn from_entries(entries: &[LeagueEntryDto]) -> Self {
        let (wins, losses) = entries.iter().fold((0u64, 0u64), |(w, l), entry| {
            (w + u64::from(entry.wins), l + u64::from(entry.losses))
        });

        let games = wins + losses;
        if games == 0 {
            return Winrate::NotEnoughData;
        }

        let percent = wins as f64 / games as f64 * 100.0;
        Winrate::Percent(round_one_decimal(percent))
    }
}

// Rounds the exact binary value, ties to even.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

impl fmt::Display for Winrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winrate::Percent(value) => write!(f, "{:.1}%", value),
            Winrate::NotEnoughData => write!(f, "Not enough data"),
        }
    }
}

/// First entry's tier, no queue filtering.
pub fn rank_from_entries(entries: &[LeagueEntryDto]) -> String {
    entries
        .first()
        .map(|entry| entry.tier.clone())
        .unwrap_or_else(|| UNRANKED.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MasteryStats {
    pub level: u32,
    pub points: u64,
    /// 1-based position among the player's top masteries, 0 when absent.
    pub top_rank: u8,
}

impl MasteryStats {
    pub fn is_top_champion(&self) -> bool {
        (1..=TOP_MASTERY_SLOTS as u8).contains(&self.top_rank)
    }
}

pub fn top_rank(top_masteries: &[ChampionMasteryDto], champion_id: i64) -> u8 {
    top_masteries
        .iter()
        .take(TOP_MASTERY_SLOTS)
        .position(|mastery| mastery.champion_id == champion_id)
        .map(|index| index as u8 + 1)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantStats {
    pub summoner_name: String,
    pub team_id: i64,
    pub rank: String,
    pub winrate: Winrate,
    pub champion_name: String,
    pub mastery: MasteryStats,
}

impl ParticipantStats {
    pub fn top_champion_note(&self) -> Option<String> {
        self.mastery.is_top_champion().then(|| {
            format!(
                "This is {}'s #{} champion",
                self.summoner_name, self.mastery.top_rank
            )
        })
    }
}
