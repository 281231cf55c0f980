//! Polar projection of multi-metric profiles for radar charts.
//!
//! Axis 0 points straight up and the remaining axes follow clockwise in
//! screen coordinates (y grows downwards). Every point is expressed relative
//! to [`RadarConfig::center`], so a renderer only needs to translate.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::aggregate::SquadPlayerStats;
use crate::error::{AnalyticsError, AnalyticsResult, RadarError};
use crate::metrics::PlayerMetric;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    pub radius: f64,
    pub levels: usize,
    pub center: Point,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            levels: 5,
            center: Point { x: 0.0, y: 0.0 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedMetricSet {
    pub name: String,
    pub values: Vec<MetricValue>,
}

impl NamedMetricSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn with(mut self, label: impl Into<String>, value: f64) -> Self {
        self.values.push(MetricValue {
            label: label.into(),
            value,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub label: String,
    pub angle: f64,
    pub max: f64,
    /// Outer end of the spoke.
    pub end: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub label: String,
    pub value: f64,
    pub ratio: f64,
    pub point: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPolygon {
    pub name: String,
    /// Closed: the first point is repeated at the end.
    pub points: Vec<RadarPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonSet {
    pub axes: Vec<RadarAxis>,
    /// Innermost ring first, each closed like the polygons.
    pub grid_rings: Vec<Vec<Point>>,
    pub polygons: Vec<RadarPolygon>,
}

impl PolygonSet {
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

pub fn axis_angle(axis: usize, axis_count: usize) -> f64 {
    -FRAC_PI_2 + axis as f64 * (TAU / axis_count as f64)
}

/// Project `entities` onto shared axes.
///
/// Without `max_per_axis` each axis is normalized by the largest value seen on
/// it, floored at 1. Empty inputs and inputs with fewer than two axes yield an
/// empty set; inconsistent axes are a caller bug and fail.
pub fn project(
    entities: &[NamedMetricSet],
    max_per_axis: Option<&[f64]>,
    cfg: &RadarConfig,
) -> Result<PolygonSet, RadarError> {
    let Some(first) = entities.first() else {
        return Ok(PolygonSet::default());
    };
    let n = first.values.len();
    for entity in entities {
        check_axes(first, entity)?;
    }
    if n < 2 {
        return Ok(PolygonSet::default());
    }

    let maxima = match max_per_axis {
        Some(given) => {
            if given.len() != n {
                return Err(RadarError::MaxLengthMismatch {
                    expected: n,
                    found: given.len(),
                });
            }
            if let Some((axis, value)) = given
                .iter()
                .copied()
                .enumerate()
                .find(|(_, v)| !v.is_finite() || *v <= 0.0)
            {
                return Err(RadarError::InvalidAxisMax { axis, value });
            }
            given.to_vec()
        }
        None => (0..n)
            .map(|axis| {
                entities
                    .iter()
                    .map(|e| e.values[axis].value)
                    .filter(|v| v.is_finite())
                    .fold(1.0_f64, f64::max)
            })
            .collect(),
    };

    let axes = first
        .values
        .iter()
        .zip(&maxima)
        .enumerate()
        .map(|(axis, (metric, max))| {
            let angle = axis_angle(axis, n);
            RadarAxis {
                label: metric.label.clone(),
                angle,
                max: *max,
                end: polar(cfg.center, cfg.radius, angle),
            }
        })
        .collect::<Vec<_>>();

    let grid_rings = (1..=cfg.levels)
        .map(|k| {
            let r = cfg.radius * k as f64 / cfg.levels as f64;
            close(axes.iter().map(|a| polar(cfg.center, r, a.angle)).collect())
        })
        .collect();

    let polygons = entities
        .iter()
        .map(|entity| {
            let points: Vec<RadarPoint> = entity
                .values
                .iter()
                .zip(&axes)
                .map(|(metric, axis)| {
                    let ratio = normalized(metric.value, axis.max);
                    RadarPoint {
                        label: metric.label.clone(),
                        value: metric.value,
                        ratio,
                        point: polar(cfg.center, ratio * cfg.radius, axis.angle),
                    }
                })
                .collect();
            RadarPolygon {
                name: entity.name.clone(),
                points: close(points),
            }
        })
        .collect();

    Ok(PolygonSet {
        axes,
        grid_rings,
        polygons,
    })
}

/// Radar for the named players over `metrics`, scaled against the whole squad.
pub fn player_radar(
    stats: &[SquadPlayerStats],
    names: &[&str],
    metrics: &[PlayerMetric],
    cfg: &RadarConfig,
) -> AnalyticsResult<PolygonSet> {
    let mut entities = Vec::with_capacity(names.len());
    for name in names {
        let row = stats
            .iter()
            .find(|s| s.name == *name)
            .ok_or_else(|| AnalyticsError::UnknownPlayer(name.to_string()))?;
        let set = metrics
            .iter()
            .fold(NamedMetricSet::new(*name), |set, m| set.with(m.label(), m.value(row)));
        entities.push(set);
    }

    let maxima: Vec<f64> = metrics
        .iter()
        .map(|m| {
            m.fixed_max().unwrap_or_else(|| {
                stats.iter().map(|s| m.value(s)).fold(1.0_f64, f64::max)
            })
        })
        .collect();

    Ok(project(&entities, Some(maxima.as_slice()), cfg)?)
}

fn check_axes(reference: &NamedMetricSet, entity: &NamedMetricSet) -> Result<(), RadarError> {
    if entity.values.len() != reference.values.len() {
        return Err(RadarError::AxisCountMismatch {
            entity: entity.name.clone(),
            expected: reference.values.len(),
            found: entity.values.len(),
        });
    }
    for (axis, (want, got)) in reference.values.iter().zip(&entity.values).enumerate() {
        if want.label != got.label {
            return Err(RadarError::AxisLabelMismatch {
                entity: entity.name.clone(),
                axis,
                expected: want.label.clone(),
                found: got.label.clone(),
            });
        }
    }
    Ok(())
}

// Negative or NaN values sit at the center; callers shift net metrics themselves.
fn normalized(value: f64, max: f64) -> f64 {
    let ratio = value / max;
    if ratio.is_nan() { 0.0 } else { ratio.max(0.0) }
}

fn polar(center: Point, r: f64, angle: f64) -> Point {
    Point {
        x: center.x + r * angle.cos(),
        y: center.y + r * angle.sin(),
    }
}

fn close<T: Clone>(mut points: Vec<T>) -> Vec<T> {
    if let Some(first) = points.first().cloned() {
        points.push(first);
    }
    points
}
