use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregate::SquadPlayerStats;

/// Every numeric column of [`SquadPlayerStats`] that can be ranked or plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerMetric {
    MatchesPlayed,
    Goals,
    Assists,
    MinutesPlayed,
    Starts,
    SubAppearances,
    Wins,
    Draws,
    Losses,
    CleanSheets,
    WinRate,
    Effectiveness,
    GoalsPerMatch,
    AssistsPerMatch,
    MinutesPercentage,
}

impl PlayerMetric {
    pub const ALL: [PlayerMetric; 15] = [
        PlayerMetric::MatchesPlayed,
        PlayerMetric::Goals,
        PlayerMetric::Assists,
        PlayerMetric::MinutesPlayed,
        PlayerMetric::Starts,
        PlayerMetric::SubAppearances,
        PlayerMetric::Wins,
        PlayerMetric::Draws,
        PlayerMetric::Losses,
        PlayerMetric::CleanSheets,
        PlayerMetric::WinRate,
        PlayerMetric::Effectiveness,
        PlayerMetric::GoalsPerMatch,
        PlayerMetric::AssistsPerMatch,
        PlayerMetric::MinutesPercentage,
    ];

    pub fn value(self, s: &SquadPlayerStats) -> f64 {
        match self {
            PlayerMetric::MatchesPlayed => f64::from(s.matches_played),
            PlayerMetric::Goals => f64::from(s.goals),
            PlayerMetric::Assists => f64::from(s.assists),
            PlayerMetric::MinutesPlayed => f64::from(s.minutes_played),
            PlayerMetric::Starts => f64::from(s.starts),
            PlayerMetric::SubAppearances => f64::from(s.sub_appearances),
            PlayerMetric::Wins => f64::from(s.wins),
            PlayerMetric::Draws => f64::from(s.draws),
            PlayerMetric::Losses => f64::from(s.losses),
            PlayerMetric::CleanSheets => f64::from(s.clean_sheets),
            PlayerMetric::WinRate => s.win_rate,
            PlayerMetric::Effectiveness => s.effectiveness,
            PlayerMetric::GoalsPerMatch => s.goals_per_match,
            PlayerMetric::AssistsPerMatch => s.assists_per_match,
            PlayerMetric::MinutesPercentage => s.minutes_percentage,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerMetric::MatchesPlayed => "Matches",
            PlayerMetric::Goals => "Goals",
            PlayerMetric::Assists => "Assists",
            PlayerMetric::MinutesPlayed => "Minutes",
            PlayerMetric::Starts => "Starts",
            PlayerMetric::SubAppearances => "Sub apps",
            PlayerMetric::Wins => "Wins",
            PlayerMetric::Draws => "Draws",
            PlayerMetric::Losses => "Losses",
            PlayerMetric::CleanSheets => "Clean sheets",
            PlayerMetric::WinRate => "Win %",
            PlayerMetric::Effectiveness => "Effectiveness %",
            PlayerMetric::GoalsPerMatch => "Goals/match",
            PlayerMetric::AssistsPerMatch => "Assists/match",
            PlayerMetric::MinutesPercentage => "Minutes %",
        }
    }

    /// Percentages share a fixed 0..100 scale; everything else is relative to the squad.
    pub fn fixed_max(self) -> Option<f64> {
        match self {
            PlayerMetric::WinRate
            | PlayerMetric::Effectiveness
            | PlayerMetric::MinutesPercentage => Some(100.0),
            _ => None,
        }
    }

    fn key(self) -> &'static str {
        match self {
            PlayerMetric::MatchesPlayed => "matches_played",
            PlayerMetric::Goals => "goals",
            PlayerMetric::Assists => "assists",
            PlayerMetric::MinutesPlayed => "minutes_played",
            PlayerMetric::Starts => "starts",
            PlayerMetric::SubAppearances => "sub_appearances",
            PlayerMetric::Wins => "wins",
            PlayerMetric::Draws => "draws",
            PlayerMetric::Losses => "losses",
            PlayerMetric::CleanSheets => "clean_sheets",
            PlayerMetric::WinRate => "win_rate",
            PlayerMetric::Effectiveness => "effectiveness",
            PlayerMetric::GoalsPerMatch => "goals_per_match",
            PlayerMetric::AssistsPerMatch => "assists_per_match",
            PlayerMetric::MinutesPercentage => "minutes_percentage",
        }
    }
}

impl fmt::Display for PlayerMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PlayerMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        PlayerMetric::ALL
            .into_iter()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| format!("unknown player metric: {s}"))
    }
}

/// Players with a positive value for `metric`, best first. Ties keep input order.
pub fn leaderboard(stats: &[SquadPlayerStats], metric: PlayerMetric) -> Vec<SquadPlayerStats> {
    let mut rows: Vec<SquadPlayerStats> = stats
        .iter()
        .filter(|s| metric.value(s) > 0.0)
        .cloned()
        .collect();
    rows.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
    rows
}
