use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::model::{MatchRecord, MatchResult};

pub const IMPACT_POINTS_WEIGHT: f64 = 1.5;
pub const IMPACT_GOALS_WEIGHT: f64 = 1.0;
pub const IMPACT_ASSISTS_WEIGHT: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    /// Below this many matches in the log no pairs are produced at all.
    pub min_matches: usize,
    /// A pair needs at least this many shared matches to be reported.
    pub min_shared_matches: u32,
    pub top_players: usize,
}

impl Default for PairConfig {
    fn default() -> Self {
        Self {
            min_matches: 3,
            min_shared_matches: 3,
            top_players: 12,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPairStats {
    /// Lexicographically smaller name.
    pub player_a: String,
    pub player_b: String,
    pub matches_together: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub goals: u32,
    pub assists: u32,
    pub minutes_together: u32,
    pub points_per_match: f64,
    pub goals_per_match: f64,
    pub assists_per_match: f64,
    pub impact_score: f64,
    pub win_rate: f64,
    pub effectiveness: f64,
}

impl PlayerPairStats {
    fn new(a: &str, b: &str) -> Self {
        let (player_a, player_b) = ordered(a, b);
        Self {
            player_a: player_a.to_string(),
            player_b: player_b.to_string(),
            ..Self::default()
        }
    }

    /// Stable identity used by the rank tracker.
    pub fn key(&self) -> String {
        pair_key(&self.player_a, &self.player_b)
    }

    pub fn involves(&self, name: &str) -> bool {
        self.player_a == name || self.player_b == name
    }

    fn finish(&mut self) {
        if self.matches_together == 0 {
            return;
        }
        let n = f64::from(self.matches_together);
        self.points_per_match = f64::from(self.points) / n;
        self.goals_per_match = f64::from(self.goals) / n;
        self.assists_per_match = f64::from(self.assists) / n;
        self.impact_score = impact_score(
            self.points_per_match,
            self.goals_per_match,
            self.assists_per_match,
        );
        self.win_rate = f64::from(self.wins) / n * 100.0;
        self.effectiveness = f64::from(self.points) / (n * 3.0) * 100.0;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    pub pairs: Vec<PlayerPairStats>,
    pub top_players: Vec<String>,
}

pub fn impact_score(points_per_match: f64, goals_per_match: f64, assists_per_match: f64) -> f64 {
    IMPACT_POINTS_WEIGHT * points_per_match
        + IMPACT_GOALS_WEIGHT * goals_per_match
        + IMPACT_ASSISTS_WEIGHT * assists_per_match
}

/// Order-free key for a pair of player names. `|` separates the two names;
/// a `|` or `\\` inside a name is escaped with a backslash so distinct pairs
/// never share a key.
pub fn pair_key(a: &str, b: &str) -> String {
    let (x, y) = ordered(a, b);
    format!("{}|{}", escape_name(x), escape_name(y))
}

fn escape_name(name: &str) -> String {
    name.replace('\\', "\\\\").replace('|', "\\|")
}

fn ordered<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Joint performance of every pair of players who shared enough matches,
/// best impact score first.
pub fn analyze_pairs(matches: &[MatchRecord], cfg: &PairConfig) -> PairResult {
    if matches.len() < cfg.min_matches {
        log::debug!(
            "pairs: {} matches is below the {} match minimum",
            matches.len(),
            cfg.min_matches
        );
        return PairResult::default();
    }

    let mut pairs: Vec<PlayerPairStats> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for m in matches {
        let roster: Vec<_> = m.named_appearances().collect();
        for (i, a) in roster.iter().enumerate() {
            for b in &roster[i + 1..] {
                let (x, y) = ordered(&a.name, &b.name);
                let slot = *index.entry((x.to_string(), y.to_string())).or_insert_with(|| {
                    pairs.push(PlayerPairStats::new(&a.name, &b.name));
                    pairs.len() - 1
                });
                let pair = &mut pairs[slot];
                pair.matches_together += 1;
                pair.points += m.result().points();
                match m.result() {
                    MatchResult::Win => pair.wins += 1,
                    MatchResult::Draw => pair.draws += 1,
                    MatchResult::Loss => pair.losses += 1,
                }
                pair.goals = pair.goals.saturating_add(a.goals.saturating_add(b.goals));
                pair.assists = pair
                    .assists
                    .saturating_add(a.assists.saturating_add(b.assists));
                pair.minutes_together = pair
                    .minutes_together
                    .saturating_add(a.minutes_played.min(b.minutes_played));
            }
        }
    }

    let seen = pairs.len();
    let mut pairs: Vec<PlayerPairStats> = pairs
        .into_iter()
        .filter(|p| p.matches_together >= cfg.min_shared_matches)
        .map(|mut p| {
            p.finish();
            p
        })
        .collect();
    // sort_by is stable: equal scores stay in the order the pair was first seen.
    pairs.sort_by(|a, b| b.impact_score.total_cmp(&a.impact_score));
    log::debug!("pairs: kept {} of {} pairs", pairs.len(), seen);

    PairResult {
        pairs,
        top_players: top_players(matches, cfg.top_players),
    }
}

/// Names with the most appearances, capped at `limit`. Ties keep first-appearance order.
pub fn top_players(matches: &[MatchRecord], limit: usize) -> Vec<String> {
    let mut stats = aggregate(matches);
    stats.sort_by(|a, b| b.matches_played.cmp(&a.matches_played));
    stats.into_iter().take(limit).map(|s| s.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_key_ignores_argument_order() {
        assert_eq!(pair_key("Zoe", "Ana"), pair_key("Ana", "Zoe"));
        assert_eq!(pair_key("Ana", "Zoe"), "Ana|Zoe");
    }

    #[test]
    fn pair_key_escapes_separator_in_names() {
        assert_ne!(pair_key("A|B", "C"), pair_key("A", "B|C"));
        assert_eq!(pair_key("A|B", "C"), "A\\|B|C");
        assert_ne!(pair_key("A\\", "B"), pair_key("A", "\\B"));
    }

    #[test]
    fn impact_score_weights() {
        let s = impact_score(2.0, 1.0, 4.0);
        assert!((s - (3.0 + 1.0 + 3.0)).abs() < 1e-12);
    }
}
