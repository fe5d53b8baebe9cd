// src/geometry/bar.rs
use serde::Serialize;

use super::scale::BandScale;
use super::{Rect, format_value};
use crate::config::consts::{ACCENT_COLOR, BAND_PADDING, BAR_HEADROOM, BAR_HEIGHT};
use crate::records::SectorRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarConfig {
    pub width: f64,
    pub height: f64,
    /// Scale top; `None` (or non-positive) means 1.1 × the largest value.
    pub max_value: Option<f64>,
    pub orientation: Orientation,
    pub padding: f64,
    pub value_suffix: String,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: BAR_HEIGHT,
            max_value: None,
            orientation: Orientation::Vertical,
            padding: BAND_PADDING,
            value_suffix: s!("%"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// `value / max`, 0 for non-positive or NaN values.
    pub fraction: f64,
    pub rect: Rect,
    pub color: String,
    pub value_text: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChartGeometry {
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
    pub max_value: f64,
    pub bars: Vec<Bar>,
    /// Horizontal guide lines as (fraction of max, y). Vertical bars only.
    pub grid_lines: Vec<(f64, f64)>,
}

pub const GRID_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

fn scale_max(data: &[SectorRecord], configured: Option<f64>) -> f64 {
    match configured {
        Some(m) if m > 0.0 && m.is_finite() => m,
        _ => {
            let top = data
                .iter()
                .map(|d| d.value)
                .filter(|v| v.is_finite())
                .fold(f64::NEG_INFINITY, f64::max);
            if top.is_finite() { top * BAR_HEADROOM } else { 0.0 }
        }
    }
}

pub fn bar_chart(data: &[SectorRecord], cfg: &BarConfig) -> BarChartGeometry {
    let max_value = scale_max(data, cfg.max_value);
    let labels: Vec<String> = data.iter().map(|d| d.label.clone()).collect();

    let along = match cfg.orientation {
        Orientation::Vertical => cfg.width,
        Orientation::Horizontal => cfg.height,
    };
    let band = BandScale::new(labels, (0.0, along), cfg.padding);

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let fraction = if max_value > 0.0 && d.value > 0.0 {
                d.value / max_value
            } else {
                0.0
            };
            let rect = match cfg.orientation {
                Orientation::Vertical => {
                    let h = fraction * cfg.height;
                    Rect::new(band.position_at(i), cfg.height - h, band.bandwidth(), h)
                }
                Orientation::Horizontal => {
                    Rect::new(0.0, band.position_at(i), fraction * cfg.width, band.bandwidth())
                }
            };
            Bar {
                label: d.label.clone(),
                value: d.value,
                fraction,
                rect,
                color: d.color.clone().unwrap_or_else(|| s!(ACCENT_COLOR)),
                value_text: format!("{}{}", format_value(d.value), cfg.value_suffix),
                description: d.description.clone(),
            }
        })
        .collect();

    let grid_lines = match cfg.orientation {
        Orientation::Vertical => GRID_FRACTIONS
            .iter()
            .map(|f| (*f, cfg.height - f * cfg.height))
            .collect(),
        Orientation::Horizontal => Vec::new(),
    };

    BarChartGeometry {
        width: cfg.width,
        height: cfg.height,
        orientation: cfg.orientation,
        max_value,
        bars,
        grid_lines,
    }
}
