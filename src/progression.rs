use serde::{Deserialize, Serialize};

use crate::model::MatchRecord;

pub const BASE_MATCH_XP: u64 = 10;
pub const XP_PER_GOAL: u64 = 5;
pub const XP_PER_ASSIST: u64 = 3;
pub const BASE_LEVEL_COST: f64 = 100.0;
pub const LEVEL_COST_GROWTH: f64 = 1.2;

/// Goals and assists credited to the tracked player in one match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchContribution {
    pub goals: u32,
    pub assists: u32,
}

impl MatchContribution {
    pub fn new(goals: u32, assists: u32) -> Self {
        Self { goals, assists }
    }

    /// `None` when `name` did not appear in the match.
    pub fn for_player(m: &MatchRecord, name: &str) -> Option<Self> {
        m.appearance_of(name).map(|p| Self::new(p.goals, p.assists))
    }

    pub fn xp(self) -> u64 {
        BASE_MATCH_XP
            + XP_PER_GOAL * u64::from(self.goals)
            + XP_PER_ASSIST * u64::from(self.assists)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub total_xp: u64,
    pub level: u32,
    pub current_level_xp: u64,
    pub next_level_xp: u64,
    pub progress_percent: f64,
}

/// XP needed to go from `level` to `level + 1`.
pub fn level_cost(level: u32) -> u64 {
    let exp = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    (BASE_LEVEL_COST * LEVEL_COST_GROWTH.powi(exp)).floor() as u64
}

/// Total XP spent to reach `level` from level 1.
pub fn cumulative_cost(level: u32) -> u64 {
    (1..level).map(level_cost).sum()
}

pub fn compute_progression(contributions: &[MatchContribution]) -> ProgressionState {
    let total_xp = contributions
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.xp()));
    progression_from_xp(total_xp)
}

pub fn progression_for_player(matches: &[MatchRecord], name: &str) -> ProgressionState {
    let contributions: Vec<MatchContribution> = matches
        .iter()
        .filter_map(|m| MatchContribution::for_player(m, name))
        .collect();
    compute_progression(&contributions)
}

pub fn progression_from_xp(total_xp: u64) -> ProgressionState {
    let mut level = 1u32;
    let mut remaining = total_xp;
    loop {
        let cost = level_cost(level);
        if cost == 0 || remaining < cost {
            break;
        }
        remaining -= cost;
        level += 1;
    }

    let next_level_xp = level_cost(level);
    let progress_percent = if next_level_xp == 0 {
        100.0
    } else {
        (remaining as f64 / next_level_xp as f64 * 100.0).min(100.0)
    };

    ProgressionState {
        total_xp,
        level,
        current_level_xp: remaining,
        next_level_xp,
        progress_percent,
    }
}
