use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{MatchRecord, MatchResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquadPlayerStats {
    pub name: String,
    pub matches_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub minutes_played: u32,
    pub starts: u32,
    pub sub_appearances: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub clean_sheets: u32,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    pub effectiveness: f64,
    pub goals_per_match: f64,
    pub assists_per_match: f64,
    pub minutes_percentage: f64,
}

impl SquadPlayerStats {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    fn finish_rates(&mut self) {
        let played = f64::from(self.matches_played);
        if self.matches_played == 0 {
            return;
        }
        self.win_rate = f64::from(self.wins) / played * 100.0;
        self.draw_rate = f64::from(self.draws) / played * 100.0;
        self.loss_rate = f64::from(self.losses) / played * 100.0;
        self.effectiveness = f64::from(self.points()) / (played * 3.0) * 100.0;
        self.goals_per_match = f64::from(self.goals) / played;
        self.assists_per_match = f64::from(self.assists) / played;
    }
}

/// Team-level record across the whole match log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquadSummary {
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub clean_sheets: u32,
    pub win_rate: f64,
    pub effectiveness: f64,
}

/// Fold a match log into per-player cumulative stats.
///
/// Players come out in the order they first appear in `matches`. Unnamed
/// appearances are skipped and a name listed twice in one match counts once.
pub fn aggregate(matches: &[MatchRecord]) -> Vec<SquadPlayerStats> {
    let mut rows: Vec<SquadPlayerStats> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for m in matches {
        skipped += m.players.iter().filter(|p| !p.is_named()).count();
        for p in m.named_appearances() {
            let slot = *index.entry(p.name.clone()).or_insert_with(|| {
                rows.push(SquadPlayerStats::new(&p.name));
                rows.len() - 1
            });
            let row = &mut rows[slot];

            row.matches_played += 1;
            row.goals = row.goals.saturating_add(p.goals);
            row.assists = row.assists.saturating_add(p.assists);
            row.minutes_played = row.minutes_played.saturating_add(p.minutes_played);

            if p.status.is_start() {
                row.starts += 1;
            } else if p.status.is_substitute() {
                row.sub_appearances += 1;
            }

            match m.result() {
                MatchResult::Win => row.wins += 1,
                MatchResult::Draw => row.draws += 1,
                MatchResult::Loss => row.losses += 1,
            }
            if m.is_clean_sheet() {
                row.clean_sheets += 1;
            }
        }
    }

    if skipped > 0 {
        log::debug!("aggregate: skipped {skipped} unassigned appearances");
    }

    let max_minutes = rows.iter().map(|r| r.minutes_played).max().unwrap_or(0);
    for row in &mut rows {
        row.finish_rates();
        row.minutes_percentage = if max_minutes == 0 {
            0.0
        } else {
            f64::from(row.minutes_played) / f64::from(max_minutes) * 100.0
        };
    }
    rows
}

pub fn squad_summary(matches: &[MatchRecord]) -> SquadSummary {
    let mut out = SquadSummary::default();
    for m in matches {
        out.matches_played += 1;
        out.goals_for = out.goals_for.saturating_add(m.team_score());
        out.goals_against = out.goals_against.saturating_add(m.opponent_score());
        out.goal_difference += m.goal_difference();
        match m.result() {
            MatchResult::Win => out.wins += 1,
            MatchResult::Draw => out.draws += 1,
            MatchResult::Loss => out.losses += 1,
        }
        if m.is_clean_sheet() {
            out.clean_sheets += 1;
        }
    }
    if out.matches_played > 0 {
        let played = f64::from(out.matches_played);
        out.win_rate = f64::from(out.wins) / played * 100.0;
        out.effectiveness = f64::from(out.wins * 3 + out.draws) / (played * 3.0) * 100.0;
    }
    out
}
