// src/geometry/gauge.rs
use std::f64::consts::{PI, TAU};

use serde::Serialize;

use super::{Point, format_value};
use crate::config::consts::{GAUGE_RADIUS, GAUGE_SIZE, GAUGE_STROKE, GAUGE_TRACK_COLOR};
use crate::records::RiskTier;

#[derive(Clone, Debug, PartialEq)]
pub struct GaugeConfig {
    pub size: f64,
    pub radius: f64,
    pub stroke_width: f64,
    /// Fixed arc color. `None` colors by risk tier.
    pub color: Option<String>,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            size: GAUGE_SIZE,
            radius: GAUGE_RADIUS,
            stroke_width: GAUGE_STROKE,
            color: None,
        }
    }
}

impl GaugeConfig {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// Full-circle progress arc drawn with a dash pattern.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GaugeGeometry {
    pub percentage: f64,
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub circumference: f64,
    pub dash_array: f64,
    pub dash_offset: f64,
    /// Arc starts at 3 o'clock; rotating by this puts 0% at the top.
    pub rotation_deg: f64,
    pub tier: RiskTier,
    pub color: String,
    pub track_color: String,
    pub label: &'static str,
    pub text: String,
}

impl GaugeGeometry {
    /// Filled share of the ring, 0..=1.
    pub fn fraction(&self) -> f64 {
        self.percentage / 100.0
    }

    /// Polyline along the filled arc, relative to `center`, starting at
    /// the top and running clockwise. Empty at 0%.
    pub fn arc_points(&self, segments: usize) -> Vec<Point> {
        let sweep = self.fraction() * TAU;
        if sweep <= 0.0 || segments == 0 {
            return Vec::new();
        }
        (0..=segments)
            .map(|i| Point::polar(self.radius, sweep * i as f64 / segments as f64))
            .collect()
    }
}

/// Out-of-range input is clamped; NaN draws as 0.
fn clamp_percentage(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 100.0) }
}

/// Dash offset that leaves `percentage` of the ring visible.
pub fn dash_offset(percentage: f64, circumference: f64) -> f64 {
    circumference * (1.0 - clamp_percentage(percentage) / 100.0)
}

pub fn gauge(percentage: f64, cfg: &GaugeConfig) -> GaugeGeometry {
    let p = clamp_percentage(percentage);
    let circumference = TAU * cfg.radius;
    let tier = RiskTier::classify(p);

    GaugeGeometry {
        percentage: p,
        size: cfg.size,
        center: Point::new(cfg.size / 2.0, cfg.size / 2.0),
        radius: cfg.radius,
        stroke_width: cfg.stroke_width,
        circumference,
        dash_array: circumference,
        dash_offset: dash_offset(p, circumference),
        rotation_deg: -90.0,
        tier,
        color: cfg.color.clone().unwrap_or_else(|| s!(tier.color())),
        track_color: s!(GAUGE_TRACK_COLOR),
        label: tier.label(),
        text: format!("{}%", format_value(p)),
    }
}

/// SVG path of the half-ring gauge variant: starts at the top and sweeps
/// `percent/100 × π` clockwise around the centre of a `size` square.
pub fn arc_path(percent: f64, size: f64, radius: f64) -> String {
    let p = clamp_percentage(percent);
    let c = size / 2.0;
    let start = -PI / 2.0;
    let end = start + p / 100.0 * PI;
    let x2 = c + radius * end.cos();
    let y2 = c + radius * end.sin();
    let large_arc = if p > 50.0 { 1 } else { 0 };

    format!(
        "M {} {} A {} {} 0 {} 1 {} {}",
        format_value(c),
        format_value(c - radius),
        format_value(radius),
        format_value(radius),
        large_arc,
        x2,
        y2
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_and_handles_nan() {
        let cfg = GaugeConfig::default();
        assert_eq!(gauge(140.0, &cfg).percentage, 100.0);
        assert_eq!(gauge(-5.0, &cfg).dash_offset, gauge(0.0, &cfg).circumference);
        let g = gauge(f64::NAN, &cfg);
        assert_eq!(g.percentage, 0.0);
        assert_eq!(g.text, "0%");
    }

    #[test]
    fn arc_points_start_at_top() {
        let g = gauge(25.0, &GaugeConfig::default());
        let pts = g.arc_points(4);
        assert_eq!(pts.len(), 5);
        assert!((pts[0].y + g.radius).abs() < 1e-9);
        let last = pts[4];
        assert!((last.x - g.radius).abs() < 1e-9);
        assert!(last.y.abs() < 1e-9);
        assert!(gauge(0.0, &GaugeConfig::default()).arc_points(8).is_empty());
    }

    #[test]
    fn half_ring_path_at_zero_and_full() {
        assert!(arc_path(0.0, 220.0, 80.0).starts_with("M 110 30 A 80 80 0 0 1 "));
        assert!(arc_path(100.0, 220.0, 80.0).contains(" 0 1 1 "));
    }
}
