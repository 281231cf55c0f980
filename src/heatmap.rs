use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pairs::{PairResult, pair_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn lerp(self, other: Color, t: f64) -> Color {
        Color {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected #rrggbb, got {s}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("expected #rrggbb, got {s}"))
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapPalette {
    pub low: Color,
    pub mid: Color,
    pub high: Color,
}

impl Default for HeatmapPalette {
    fn default() -> Self {
        Self {
            low: Color::rgb(0xef, 0x44, 0x44),
            mid: Color::rgb(0xf5, 0x9e, 0x0b),
            high: Color::rgb(0x22, 0xc5, 0x5e),
        }
    }
}

impl HeatmapPalette {
    pub fn color_for(&self, score: f64, min_score: f64, max_score: f64) -> Color {
        color_for(score, min_score, max_score, self.low, self.mid, self.high)
    }
}

/// Three-stop gradient: `low` at `min_score`, `mid` halfway, `high` at `max_score`.
pub fn color_for(
    score: f64,
    min_score: f64,
    max_score: f64,
    low: Color,
    mid: Color,
    high: Color,
) -> Color {
    let range = max_score - min_score;
    if range == 0.0 || !range.is_finite() {
        return mid;
    }
    let normalized = ((score - min_score) / range).clamp(0.0, 1.0);
    if normalized.is_nan() {
        return mid;
    }
    if normalized < 0.5 {
        low.lerp(mid, normalized * 2.0)
    } else {
        mid.lerp(high, (normalized - 0.5) * 2.0)
    }
}

fn lerp_channel(c0: u8, c1: u8, t: f64) -> u8 {
    let c0 = f64::from(c0);
    let c1 = f64::from(c1);
    (c0 + t * (c1 - c0)).round().clamp(0.0, 255.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub impact_score: f64,
    pub color: Color,
}

/// Square grid of pair impact scores over the most used players.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynergyMatrix {
    pub players: Vec<String>,
    /// `cells[i][j]` is the pair of `players[i]` and `players[j]`; `None` on the
    /// diagonal and for pairs without enough shared matches.
    pub cells: Vec<Vec<Option<MatrixCell>>>,
    pub min_score: f64,
    pub max_score: f64,
}

pub fn synergy_matrix(result: &PairResult, palette: &HeatmapPalette) -> SynergyMatrix {
    let players = result.top_players.clone();
    let in_grid = |name: &str| players.iter().any(|p| p == name);
    let scores: Vec<(String, f64)> = result
        .pairs
        .iter()
        .filter(|p| in_grid(&p.player_a) && in_grid(&p.player_b))
        .map(|p| (p.key(), p.impact_score))
        .collect();
    if scores.is_empty() {
        return SynergyMatrix {
            cells: vec![vec![None; players.len()]; players.len()],
            players,
            ..SynergyMatrix::default()
        };
    }

    let min_score = scores.iter().map(|(_, s)| *s).fold(f64::INFINITY, f64::min);
    let max_score = scores.iter().map(|(_, s)| *s).fold(f64::NEG_INFINITY, f64::max);

    let cells = players
        .iter()
        .map(|a| {
            players
                .iter()
                .map(|b| {
                    if a == b {
                        return None;
                    }
                    let key = pair_key(a, b);
                    scores.iter().find(|(k, _)| *k == key).map(|(_, score)| MatrixCell {
                        impact_score: *score,
                        color: palette.color_for(*score, min_score, max_score),
                    })
                })
                .collect()
        })
        .collect();

    SynergyMatrix {
        players,
        cells,
        min_score,
        max_score,
    }
}
