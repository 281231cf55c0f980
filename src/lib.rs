//! Squad analytics: derived statistics, pair synergy, rank movement and
//! chart geometry for a personal team match log.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod heatmap;
pub mod metrics;
pub mod model;
pub mod pairs;
pub mod progression;
pub mod radar;
pub mod rank_tracker;
pub mod sample_feed;
pub mod session;

pub use aggregate::{SquadPlayerStats, SquadSummary, aggregate, squad_summary};
pub use config::AnalyticsConfig;
pub use error::{AnalyticsError, RadarError};
pub use model::{MatchRecord, MatchResult, PlayerAppearance, PlayerStatus};
pub use pairs::{PairResult, PlayerPairStats, analyze_pairs};
pub use rank_tracker::{RankMovement, Ranked, track_movement};
pub use session::{AnalyticsSession, SessionDelta};
