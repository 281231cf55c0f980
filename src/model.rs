use std::cmp::Ordering;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn from_scores(team_score: u32, opponent_score: u32) -> Self {
        match team_score.cmp(&opponent_score) {
            Ordering::Greater => MatchResult::Win,
            Ordering::Equal => MatchResult::Draw,
            Ordering::Less => MatchResult::Loss,
        }
    }

    /// League points for the result (3/1/0).
    pub fn points(self) -> u32 {
        match self {
            MatchResult::Win => 3,
            MatchResult::Draw => 1,
            MatchResult::Loss => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Starter,
    Substitute,
    Goalkeeper,
    // Anything the record keeper did not recognise. Counts as an appearance only.
    #[serde(other)]
    Unknown,
}

impl PlayerStatus {
    pub fn is_start(self) -> bool {
        matches!(self, PlayerStatus::Starter | PlayerStatus::Goalkeeper)
    }

    pub fn is_substitute(self) -> bool {
        self == PlayerStatus::Substitute
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AppearanceInput", rename_all = "camelCase")]
pub struct PlayerAppearance {
    pub name: String,
    pub goals: u32,
    pub assists: u32,
    pub minutes_played: u32,
    pub status: PlayerStatus,
}

impl PlayerAppearance {
    pub fn new(name: impl Into<String>, status: PlayerStatus) -> Self {
        Self {
            name: name.into().trim().to_string(),
            goals: 0,
            assists: 0,
            minutes_played: 0,
            status,
        }
    }

    pub fn with_goals(mut self, goals: u32) -> Self {
        self.goals = goals;
        self
    }

    pub fn with_assists(mut self, assists: u32) -> Self {
        self.assists = assists;
        self
    }

    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.minutes_played = minutes;
        self
    }

    /// Unassigned slots carry an empty name and never reach the aggregates.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Raw appearance as it arrives from storage: every number may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub goals: Option<i64>,
    #[serde(default)]
    pub assists: Option<i64>,
    #[serde(default, alias = "minutes")]
    pub minutes_played: Option<i64>,
    #[serde(default)]
    pub status: Option<PlayerStatus>,
}

impl From<AppearanceInput> for PlayerAppearance {
    fn from(raw: AppearanceInput) -> Self {
        Self {
            name: raw.name.map(|n| n.trim().to_string()).unwrap_or_default(),
            goals: non_negative(raw.goals),
            assists: non_negative(raw.assists),
            minutes_played: non_negative(raw.minutes_played),
            status: raw.status.unwrap_or(PlayerStatus::Unknown),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MatchRecordInput", rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub date: NaiveDate,
    pub tournament: Option<String>,
    pub team: String,
    pub opponent: String,
    team_score: u32,
    opponent_score: u32,
    pub players: Vec<PlayerAppearance>,
    result: MatchResult,
    goal_difference: i64,
}

impl MatchRecord {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        team: impl Into<String>,
        opponent: impl Into<String>,
        team_score: u32,
        opponent_score: u32,
    ) -> Self {
        let mut record = Self {
            id: id.into(),
            date,
            tournament: None,
            team: team.into(),
            opponent: opponent.into(),
            team_score: 0,
            opponent_score: 0,
            players: Vec::new(),
            result: MatchResult::Draw,
            goal_difference: 0,
        };
        record.set_score(team_score, opponent_score);
        record
    }

    pub fn with_tournament(mut self, tournament: impl Into<String>) -> Self {
        self.tournament = Some(tournament.into());
        self
    }

    pub fn with_player(mut self, player: PlayerAppearance) -> Self {
        self.players.push(player);
        self
    }

    /// The only way to change a score; keeps `result` and the goal difference in sync.
    pub fn set_score(&mut self, team_score: u32, opponent_score: u32) {
        self.team_score = team_score;
        self.opponent_score = opponent_score;
        self.result = MatchResult::from_scores(team_score, opponent_score);
        self.goal_difference = i64::from(team_score) - i64::from(opponent_score);
    }

    pub fn team_score(&self) -> u32 {
        self.team_score
    }

    pub fn opponent_score(&self) -> u32 {
        self.opponent_score
    }

    pub fn result(&self) -> MatchResult {
        self.result
    }

    pub fn goal_difference(&self) -> i64 {
        self.goal_difference
    }

    pub fn is_clean_sheet(&self) -> bool {
        self.opponent_score == 0
    }

    /// Named appearances with repeated names dropped (first listing wins).
    pub fn named_appearances(&self) -> impl Iterator<Item = &PlayerAppearance> + '_ {
        self.players.iter().enumerate().filter_map(|(idx, p)| {
            if !p.is_named() {
                return None;
            }
            let repeated = self.players[..idx].iter().any(|earlier| earlier.name == p.name);
            if repeated {
                log::debug!("match {}: duplicate listing for {} ignored", self.id, p.name);
                None
            } else {
                Some(p)
            }
        })
    }

    pub fn appearance_of(&self, name: &str) -> Option<&PlayerAppearance> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.players.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecordInput {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tournament: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub team_score: Option<i64>,
    #[serde(default)]
    pub opponent_score: Option<i64>,
    #[serde(default)]
    pub players: Vec<AppearanceInput>,
}

impl From<MatchRecordInput> for MatchRecord {
    fn from(raw: MatchRecordInput) -> Self {
        let mut record = MatchRecord::new(
            raw.id,
            raw.date,
            raw.team.unwrap_or_default(),
            raw.opponent.unwrap_or_default(),
            non_negative(raw.team_score),
            non_negative(raw.opponent_score),
        );
        record.tournament = raw.tournament.filter(|t| !t.trim().is_empty());
        record.players = raw.players.into_iter().map(PlayerAppearance::from).collect();
        record
    }
}

/// Parse a JSON array of match records, normalizing absent numbers to zero.
pub fn parse_matches_json(raw: &str) -> Result<Vec<MatchRecord>> {
    let rows: Vec<MatchRecordInput> =
        serde_json::from_str(raw).context("invalid match log json")?;
    Ok(rows.into_iter().map(MatchRecord::from).collect())
}

fn non_negative(v: Option<i64>) -> u32 {
    v.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32
}
