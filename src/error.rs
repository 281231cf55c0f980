use thiserror::Error;

/// Call shapes the radar projector refuses to draw.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RadarError {
    #[error("entity `{entity}` has {found} axes, expected {expected}")]
    AxisCountMismatch {
        entity: String,
        expected: usize,
        found: usize,
    },
    #[error("entity `{entity}` axis {axis} is `{found}`, expected `{expected}`")]
    AxisLabelMismatch {
        entity: String,
        axis: usize,
        expected: String,
        found: String,
    },
    #[error("{found} axis maxima supplied for {expected} axes")]
    MaxLengthMismatch { expected: usize, found: usize },
    #[error("axis {axis} maximum must be finite and positive, got {value}")]
    InvalidAxisMax { axis: usize, value: f64 },
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error(transparent)]
    Radar(#[from] RadarError),
    #[error("unknown player `{0}`")]
    UnknownPlayer(String),
}

pub type AnalyticsResult<T> = std::result::Result<T, AnalyticsError>;
