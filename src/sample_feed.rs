use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{MatchRecord, PlayerAppearance, PlayerStatus};

const SQUAD: [&str; 16] = [
    "Ana", "Bea", "Carla", "Dani", "Eli", "Fer", "Gabi", "Hugo", "Iris", "Joao", "Kai", "Lia",
    "Mika", "Noa", "Olga", "Pau",
];

const OPPONENTS: [&str; 8] = [
    "Rovers", "United", "Athletic", "Wanderers", "City", "Albion", "Rangers", "Dynamo",
];

#[derive(Debug, Clone, Copy)]
pub struct SeasonSpec {
    pub seed: u64,
    pub matches: usize,
    pub squad_size: usize,
    pub starters: usize,
    pub subs: usize,
}

impl Default for SeasonSpec {
    fn default() -> Self {
        Self {
            seed: 7,
            matches: 20,
            squad_size: 14,
            starters: 7,
            subs: 3,
        }
    }
}

/// Deterministic synthetic season for demos and benchmarks.
pub fn generate_season(season: SeasonSpec) -> Vec<MatchRecord> {
    let mut rng = StdRng::seed_from_u64(season.seed);
    let squad: Vec<String> = roster(season.squad_size);
    let starters = season.starters.clamp(1, squad.len().max(1));
    let subs = season.subs.min(squad.len().saturating_sub(starters));
    let opening = NaiveDate::from_ymd_opt(2024, 9, 7).unwrap_or_default();

    (0..season.matches)
        .map(|idx| {
            let team_score = rng.gen_range(0..5u32);
            let opponent_score = rng.gen_range(0..4u32);
            let mut record = MatchRecord::new(
                format!("m{:03}", idx + 1),
                opening + Duration::weeks(idx as i64),
                "Squad FC",
                OPPONENTS[rng.gen_range(0..OPPONENTS.len())],
                team_score,
                opponent_score,
            );
            if rng.gen_bool(0.25) {
                record = record.with_tournament("Cup");
            }

            let picked = pick_lineup(&mut rng, squad.len(), starters + subs);
            let mut goals_left = team_score;
            for (slot, player_idx) in picked.into_iter().enumerate() {
                let status = if slot == 0 {
                    PlayerStatus::Goalkeeper
                } else if slot < starters {
                    PlayerStatus::Starter
                } else {
                    PlayerStatus::Substitute
                };
                let minutes = match status {
                    PlayerStatus::Substitute => rng.gen_range(5..35),
                    _ => rng.gen_range(55..=90),
                };
                let goals = if slot > 0 && goals_left > 0 && rng.gen_bool(0.3) {
                    goals_left -= 1;
                    1
                } else {
                    0
                };
                let assists = u32::from(slot > 0 && rng.gen_bool(0.15));
                record = record.with_player(
                    PlayerAppearance::new(squad[player_idx].clone(), status)
                        .with_goals(goals)
                        .with_assists(assists)
                        .with_minutes(minutes),
                );
            }
            record
        })
        .collect()
}

fn roster(size: usize) -> Vec<String> {
    (0..size.max(1))
        .map(|idx| match SQUAD.get(idx) {
            Some(name) => name.to_string(),
            None => format!("Player {}", idx + 1),
        })
        .collect()
}

// Partial Fisher-Yates: the first `take` entries are a random lineup.
fn pick_lineup(rng: &mut impl Rng, squad_len: usize, take: usize) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..squad_len).collect();
    let take = take.min(squad_len);
    for i in 0..take {
        let j = rng.gen_range(i..squad_len);
        idx.swap(i, j);
    }
    idx.truncate(take);
    idx
}
