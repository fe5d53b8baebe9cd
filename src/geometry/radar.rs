// src/geometry/radar.rs
use std::f64::consts::TAU;

use serde::Serialize;

use super::scale::LinearScale;
use super::{Margins, Point, format_value};
use crate::config::consts::{RADAR_COLORS, RADAR_LABEL_OFFSET, RADAR_MAX_VALUE, RADAR_SIZE};
use crate::records::SkillCategoryRecord;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: String,
    /// One value per axis, same order as `RadarData::axes`.
    pub values: Vec<f64>,
}

/// Axis labels plus one or more value series over them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RadarData {
    pub axes: Vec<String>,
    pub series: Vec<RadarSeries>,
}

pub const HUMAN_SKILLS: &str = "Human Skills";
pub const AI_CAPABILITIES: &str = "AI Capabilities";

impl RadarData {
    /// Human-vs-AI profile derived from a job's impact score. Human axes
    /// fall and AI axes rise with impact, each held to a floor or cap.
    pub fn for_job(impact: f64) -> RadarData {
        let i = if impact.is_finite() { impact } else { 0.0 };
        let human = [
            ("Technical Knowledge", (100.0 - i * 0.7).max(30.0)),
            ("Creative Problem Solving", (110.0 - i * 0.8).max(40.0)),
            ("Emotional Intelligence", (120.0 - i * 0.9).max(50.0)),
        ];
        let ai = [
            ("Data Processing", (40.0 + i * 0.6).min(90.0)),
            ("Pattern Recognition", (35.0 + i * 0.7).min(95.0)),
            ("Decision Making", (25.0 + i * 0.7).min(85.0)),
        ];

        let axes = human.iter().chain(ai.iter()).map(|(n, _)| s!(*n)).collect();
        let pad = |vals: &[(&str, f64)], before: usize, after: usize| {
            let mut v = vec![0.0; before];
            v.extend(vals.iter().map(|(_, x)| *x));
            v.extend(std::iter::repeat_n(0.0, after));
            v
        };

        RadarData {
            axes,
            series: vec![
                RadarSeries { name: s!(HUMAN_SKILLS), values: pad(&human, 0, ai.len()) },
                RadarSeries { name: s!(AI_CAPABILITIES), values: pad(&ai, human.len(), 0) },
            ],
        }
    }

    /// Pivot grouped skills: every distinct skill name becomes an axis
    /// (first-seen order), every category a series. Absent or non-numeric
    /// values read as 0.
    pub fn from_categories(categories: &[SkillCategoryRecord]) -> RadarData {
        let mut axes: Vec<String> = Vec::new();
        for c in categories {
            for sk in &c.skills {
                if !axes.contains(&sk.name) {
                    axes.push(sk.name.clone());
                }
            }
        }

        let series = categories
            .iter()
            .map(|c| RadarSeries {
                name: c.category.clone(),
                values: axes
                    .iter()
                    .map(|axis| {
                        c.skills
                            .iter()
                            .rev()
                            .find(|sk| &sk.name == axis)
                            .map(|sk| sk.value)
                            .filter(|v| v.is_finite())
                            .unwrap_or(0.0)
                    })
                    .collect(),
            })
            .collect();

        RadarData { axes, series }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarConfig {
    pub size: f64,
    pub margins: Margins,
    pub max_value: f64,
    pub label_offset: f64,
    pub colors: Vec<String>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            size: RADAR_SIZE,
            margins: Margins::new(50.0, 80.0, 50.0, 80.0),
            max_value: RADAR_MAX_VALUE,
            label_offset: RADAR_LABEL_OFFSET,
            colors: RADAR_COLORS.iter().map(|c| s!(*c)).collect(),
        }
    }
}

impl RadarConfig {
    /// Radius left after margins.
    pub fn plot_radius(&self) -> f64 {
        let inner = self.margins.inner(self.size, self.size);
        inner.width.min(inner.height) / 2.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarRing {
    pub fraction: f64,
    pub radius: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarAxis {
    pub label: String,
    pub angle: f64,
    pub end: Point,
    pub label_pos: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarPolygon {
    pub name: String,
    pub color: String,
    /// Closed: the last vertex connects back to the first.
    pub points: Vec<Point>,
}

/// Centred at `center`; every point below is relative to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarGeometry {
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub max_value: f64,
    pub rings: Vec<RadarRing>,
    pub axes: Vec<RadarAxis>,
    pub polygons: Vec<RadarPolygon>,
}

pub const RING_FRACTIONS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Angle of axis `index` out of `count`; axis 0 sits at the top.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 { 0.0 } else { TAU / count as f64 * index as f64 }
}

pub fn radar(data: &RadarData, cfg: &RadarConfig) -> RadarGeometry {
    let radius = cfg.plot_radius();
    let r = LinearScale::new((0.0, cfg.max_value), (0.0, radius));
    let n = data.axes.len();

    let rings = RING_FRACTIONS
        .iter()
        .map(|f| RadarRing {
            fraction: *f,
            radius: radius * f,
            label: format_value((cfg.max_value * f).round()),
        })
        .collect();

    let axes = data
        .axes
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let angle = axis_angle(i, n);
            RadarAxis {
                label: label.clone(),
                angle,
                end: Point::polar(radius, angle),
                label_pos: Point::polar(radius + cfg.label_offset, angle),
            }
        })
        .collect();

    let polygons = data
        .series
        .iter()
        .enumerate()
        .map(|(k, s)| RadarPolygon {
            name: s.name.clone(),
            color: cfg.colors.get(k % cfg.colors.len().max(1)).cloned().unwrap_or_default(),
            points: (0..n)
                .map(|i| {
                    let v = s.values.get(i).copied().filter(|v| v.is_finite()).unwrap_or(0.0);
                    Point::polar(r.map(v), axis_angle(i, n))
                })
                .collect(),
        })
        .collect();

    RadarGeometry {
        size: cfg.size,
        center: Point::new(cfg.size / 2.0, cfg.size / 2.0),
        radius,
        max_value: cfg.max_value,
        rings,
        axes,
        polygons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::SkillValue;

    #[test]
    fn job_profile_floors_and_caps() {
        let low = RadarData::for_job(0.0);
        assert_eq!(low.series[0].values[..3], [100.0, 110.0, 120.0]);
        assert_eq!(low.series[1].values[3..], [40.0, 35.0, 25.0]);

        let high = RadarData::for_job(100.0);
        assert_eq!(high.series[0].values[..3], [30.0, 40.0, 50.0]);
        assert_eq!(high.series[1].values[3..], [90.0, 95.0, 85.0]);
        assert_eq!(high.series[0].values[3..], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn pivot_fills_missing_with_zero() {
        let cats = vec![
            SkillCategoryRecord {
                category: s!("A"),
                skills: vec![SkillValue { name: s!("x"), value: 10.0 }],
            },
            SkillCategoryRecord {
                category: s!("B"),
                skills: vec![
                    SkillValue { name: s!("y"), value: 20.0 },
                    SkillValue { name: s!("x"), value: f64::NAN },
                ],
            },
        ];
        let d = RadarData::from_categories(&cats);
        assert_eq!(d.axes, vec!["x", "y"]);
        assert_eq!(d.series[0].values, vec![10.0, 0.0]);
        assert_eq!(d.series[1].values, vec![0.0, 20.0]);
    }

    #[test]
    fn first_axis_points_up() {
        let data = RadarData {
            axes: vec![s!("a"), s!("b"), s!("c"), s!("d")],
            series: vec![RadarSeries { name: s!("s"), values: vec![100.0, 50.0, 0.0, 100.0] }],
        };
        let g = radar(&data, &RadarConfig::default());
        assert_eq!(g.radius, 170.0);
        let p = g.polygons[0].points[0];
        assert!(p.x.abs() < 1e-9 && (p.y + 170.0).abs() < 1e-9);
        let q = g.polygons[0].points[1];
        assert!((q.x - 85.0).abs() < 1e-9 && q.y.abs() < 1e-9);
        assert!((g.axes[0].label_pos.y + 190.0).abs() < 1e-9);
        assert_eq!(g.rings.iter().map(|r| r.label.as_str()).collect::<Vec<_>>(), vec!["20", "40", "60", "80", "100"]);
    }
}
