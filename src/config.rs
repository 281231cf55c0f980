use std::env;
use std::str::FromStr;

use crate::heatmap::{Color, HeatmapPalette};
use crate::pairs::PairConfig;
use crate::radar::RadarConfig;

/// Tunables for a session, read from `SQUAD_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub radar: RadarConfig,
    pub pairs: PairConfig,
    pub leaderboard_size: usize,
    pub palette: HeatmapPalette,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            radar: RadarConfig::default(),
            pairs: PairConfig::default(),
            leaderboard_size: 10,
            palette: HeatmapPalette::default(),
        }
    }
}

impl AnalyticsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AnalyticsConfig::from_env`] with an injectable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let radar = RadarConfig {
            radius: parsed(&lookup, "SQUAD_RADAR_RADIUS")
                .filter(|r: &f64| r.is_finite())
                .unwrap_or(d.radar.radius)
                .max(1.0),
            levels: parsed(&lookup, "SQUAD_RADAR_LEVELS")
                .unwrap_or(d.radar.levels)
                .clamp(1, 20),
            center: d.radar.center,
        };
        let pairs = PairConfig {
            min_matches: parsed(&lookup, "SQUAD_PAIR_MIN_MATCHES")
                .unwrap_or(d.pairs.min_matches)
                .max(1),
            min_shared_matches: parsed(&lookup, "SQUAD_PAIR_MIN_SHARED")
                .unwrap_or(d.pairs.min_shared_matches)
                .max(1),
            top_players: parsed(&lookup, "SQUAD_TOP_PLAYERS")
                .unwrap_or(d.pairs.top_players)
                .max(2),
        };
        let palette = HeatmapPalette {
            low: color_or(&lookup, "SQUAD_HEAT_LOW", d.palette.low),
            mid: color_or(&lookup, "SQUAD_HEAT_MID", d.palette.mid),
            high: color_or(&lookup, "SQUAD_HEAT_HIGH", d.palette.high),
        };
        Self {
            radar,
            pairs,
            leaderboard_size: parsed(&lookup, "SQUAD_LEADERBOARD_SIZE")
                .unwrap_or(d.leaderboard_size)
                .max(1),
            palette,
        }
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    let out = raw.trim().parse::<T>().ok();
    if out.is_none() {
        log::warn!("ignoring unparsable {key}={raw}");
    }
    out
}

fn color_or<F>(lookup: &F, key: &str, fallback: Color) -> Color
where
    F: Fn(&str) -> Option<String>,
{
    parsed(lookup, key).unwrap_or(fallback)
}
