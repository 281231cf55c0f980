use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::metrics::PlayerMetric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMovement {
    Up,
    Down,
    Stable,
    New,
}

/// One ranking entry with its 0-based position and movement since the last snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub rank: usize,
    pub movement: RankMovement,
    pub item: T,
}

/// Ordered keys of a ranking as it looked when it was last computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSnapshot {
    keys: Vec<String>,
}

impl RankSnapshot {
    pub fn from_keys(keys: Vec<String>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Annotate `current` against this snapshot and return the snapshot to
    /// use next time.
    pub fn track<T, F>(&self, current: Vec<T>, key_of: F) -> (Vec<Ranked<T>>, RankSnapshot)
    where
        F: Fn(&T) -> String,
    {
        let keys: Vec<String> = current.iter().map(&key_of).collect();
        let positions = first_positions(&self.keys);
        let ranked: Vec<Ranked<T>> = current
            .into_iter()
            .zip(&keys)
            .enumerate()
            .map(|(rank, (item, key))| Ranked {
                rank,
                movement: classify(rank, positions.get(key.as_str()).copied()),
                item,
            })
            .collect();
        (ranked, RankSnapshot { keys })
    }
}

/// Compare two orderings of the same kind of entity. Index 0 is the best rank.
pub fn track_movement<T, F>(current: &[T], previous: &[T], key_of: F) -> Vec<Ranked<T>>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let snapshot = RankSnapshot::from_keys(previous.iter().map(&key_of).collect());
    snapshot.track(current.to_vec(), key_of).0
}

fn first_positions(keys: &[String]) -> HashMap<&str, usize> {
    let mut out = HashMap::with_capacity(keys.len());
    for (idx, key) in keys.iter().enumerate() {
        out.entry(key.as_str()).or_insert(idx);
    }
    out
}

fn classify(current: usize, previous: Option<usize>) -> RankMovement {
    match previous {
        None => RankMovement::New,
        Some(prev) if prev > current => RankMovement::Up,
        Some(prev) if prev < current => RankMovement::Down,
        Some(_) => RankMovement::Stable,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingKind {
    Player(PlayerMetric),
    Pairs,
}

/// One previous snapshot per ranking kind.
#[derive(Debug, Clone, Default)]
pub struct RankHistory {
    snapshots: HashMap<RankingKind, RankSnapshot>,
}

impl RankHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, kind: RankingKind) -> Option<&RankSnapshot> {
        self.snapshots.get(&kind)
    }

    /// Track `current` against the stored snapshot for `kind` and replace it.
    pub fn track<T, F>(&mut self, kind: RankingKind, current: Vec<T>, key_of: F) -> Vec<Ranked<T>>
    where
        F: Fn(&T) -> String,
    {
        let previous = self.snapshots.remove(&kind).unwrap_or_default();
        let (ranked, next) = previous.track(current, key_of);
        self.snapshots.insert(kind, next);
        ranked
    }

    pub fn clear(&mut self) {
        if !self.snapshots.is_empty() {
            log::debug!("rank history: dropping {} snapshots", self.snapshots.len());
        }
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_positions() {
        assert_eq!(classify(0, None), RankMovement::New);
        assert_eq!(classify(0, Some(2)), RankMovement::Up);
        assert_eq!(classify(3, Some(1)), RankMovement::Down);
        assert_eq!(classify(1, Some(1)), RankMovement::Stable);
    }

    #[test]
    fn duplicate_previous_keys_use_first_position() {
        let keys = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let pos = first_positions(&keys);
        assert_eq!(pos.get("a"), Some(&0));
    }
}
