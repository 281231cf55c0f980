use crate::aggregate::{SquadPlayerStats, SquadSummary, aggregate, squad_summary};
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use crate::heatmap::{SynergyMatrix, synergy_matrix};
use crate::metrics::{PlayerMetric, leaderboard};
use crate::model::MatchRecord;
use crate::pairs::{PairResult, PlayerPairStats, analyze_pairs};
use crate::progression::{ProgressionState, progression_for_player};
use crate::radar::{PolygonSet, player_radar};
use crate::rank_tracker::{RankHistory, Ranked, RankingKind};

#[derive(Debug, Clone)]
pub enum SessionDelta {
    /// New data source: replaces every match and forgets rank history.
    LoadMatches(Vec<MatchRecord>),
    AddMatch(MatchRecord),
    RemoveMatch { id: String },
    UpdateScore {
        id: String,
        team_score: u32,
        opponent_score: u32,
    },
}

/// Long-lived owner of a match log and the previous snapshot of every ranking
/// derived from it. Everything else is recomputed on demand.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsSession {
    config: AnalyticsConfig,
    matches: Vec<MatchRecord>,
    history: RankHistory,
}

impl AnalyticsSession {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            matches: Vec::new(),
            history: RankHistory::new(),
        }
    }

    pub fn with_matches(config: AnalyticsConfig, matches: Vec<MatchRecord>) -> Self {
        let mut session = Self::new(config);
        session.matches = matches;
        session
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn history(&self) -> &RankHistory {
        &self.history
    }

    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    pub fn stats(&self) -> Vec<SquadPlayerStats> {
        aggregate(&self.matches)
    }

    pub fn summary(&self) -> SquadSummary {
        squad_summary(&self.matches)
    }

    pub fn pairs(&self) -> PairResult {
        analyze_pairs(&self.matches, &self.config.pairs)
    }

    pub fn synergy_matrix(&self) -> SynergyMatrix {
        synergy_matrix(&self.pairs(), &self.config.palette)
    }

    pub fn progression_for(&self, name: &str) -> ProgressionState {
        progression_for_player(&self.matches, name)
    }

    pub fn radar(&self, names: &[&str], metrics: &[PlayerMetric]) -> AnalyticsResult<PolygonSet> {
        player_radar(&self.stats(), names, metrics, &self.config.radar)
    }

    /// Leaderboard for `metric`, annotated against the previous call for the
    /// same metric. Stores this result as the new snapshot.
    pub fn player_leaderboard(&mut self, metric: PlayerMetric) -> Vec<Ranked<SquadPlayerStats>> {
        let mut rows = leaderboard(&self.stats(), metric);
        rows.truncate(self.config.leaderboard_size);
        self.history
            .track(RankingKind::Player(metric), rows, |s| s.name.clone())
    }

    pub fn pair_ranking(&mut self) -> Vec<Ranked<PlayerPairStats>> {
        let pairs = self.pairs().pairs;
        self.history.track(RankingKind::Pairs, pairs, PlayerPairStats::key)
    }

    /// Returns whether the match log changed.
    pub fn apply_delta(&mut self, delta: SessionDelta) -> bool {
        match delta {
            SessionDelta::LoadMatches(matches) => {
                log::debug!("session: loading {} matches", matches.len());
                self.matches = matches;
                self.history.clear();
                true
            }
            SessionDelta::AddMatch(record) => {
                if let Some(existing) = self.matches.iter_mut().find(|m| m.id == record.id) {
                    *existing = record;
                } else {
                    self.matches.push(record);
                }
                true
            }
            SessionDelta::RemoveMatch { id } => {
                let before = self.matches.len();
                self.matches.retain(|m| m.id != id);
                let removed = self.matches.len() != before;
                if !removed {
                    log::warn!("session: no match with id {id} to remove");
                }
                removed
            }
            SessionDelta::UpdateScore {
                id,
                team_score,
                opponent_score,
            } => match self.matches.iter_mut().find(|m| m.id == id) {
                Some(m) => {
                    m.set_score(team_score, opponent_score);
                    true
                }
                None => {
                    log::warn!("session: no match with id {id} to rescore");
                    false
                }
            },
        }
    }
}
