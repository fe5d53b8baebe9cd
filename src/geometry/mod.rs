// src/geometry/mod.rs
//! # Chart geometry
//!
//! Pure functions from typed records plus a size/config to pixel-space
//! geometry. Nothing here knows about egui, animation or visibility: every
//! engine returns final-state geometry and the viewer interpolates if it
//! wants a reveal effect. Call them again whenever the viewport changes.
//!
//! Coordinates are y-down (screen space). Engines that draw around a centre
//! (gauge, radar) return points relative to that centre and expose the
//! centre separately, the way an SVG `translate` would.
//!
//! All outputs derive `Serialize` so the CLI can print them.
pub mod bar;
pub mod color;
pub mod gauge;
pub mod heatmap;
pub mod isotype;
pub mod pack;
pub mod radar;
pub mod scale;
pub mod timeline;
pub mod trend;

use serde::Serialize;

pub use bar::{BarChartGeometry, BarConfig, Orientation, bar_chart};
pub use color::Rgb;
pub use gauge::{GaugeConfig, GaugeGeometry, arc_path, dash_offset, gauge};
pub use heatmap::{HeatCell, HeatmapConfig, HeatmapGeometry, heatmap};
pub use isotype::{IsotypeConfig, IsotypeGeometry, isotype};
pub use pack::{Bubble, BubbleGeometry, PackConfig, PackedBubble, pack_bubbles};
pub use radar::{RadarConfig, RadarData, RadarGeometry, RadarSeries, radar};
pub use scale::{BandScale, LinearScale};
pub use timeline::{Side, TimelineEntry, timeline};
pub use trend::{TrendConfig, TrendGeometry, TrendPoint, trend_chart};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point at `radius` along `angle`, where angle 0 points straight up
    /// and angles grow clockwise.
    pub fn polar(radius: f64, angle: f64) -> Point {
        let a = angle - std::f64::consts::FRAC_PI_2;
        Point::new(radius * a.cos(), radius * a.sin())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Plot area left inside a `width` × `height` viewport. Never negative.
    pub fn inner(&self, width: f64, height: f64) -> Rect {
        Rect::new(
            self.left,
            self.top,
            (width - self.left - self.right).max(0.0),
            (height - self.top - self.bottom).max(0.0),
        )
    }
}

/// Number as a chart label: integers without a fraction, otherwise the
/// shortest round-trip form.
pub fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_zero_is_up() {
        let p = Point::polar(10.0, 0.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 10.0).abs() < 1e-9);

        let q = Point::polar(10.0, std::f64::consts::FRAC_PI_2);
        assert!((q.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn format_value_drops_zero_fraction() {
        assert_eq!(format_value(85.0), "85");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(f64::NAN), "NaN");
    }
}
