// src/geometry/trend.rs
use serde::{Deserialize, Serialize};

use super::scale::{LinearScale, unique_in_order};
use super::{Margins, Point, Rect, format_value};
use crate::config::consts::{TREND_COLORS, TREND_FALLBACK_COLOR, TREND_HEIGHT, TREND_WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: f64,
    pub value: f64,
    pub label: String,
    pub category: String,
}

impl TrendPoint {
    pub fn new(year: f64, value: f64, label: &str, category: &str) -> Self {
        Self { year, value, label: s!(label), category: s!(category) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendConfig {
    pub width: f64,
    pub height: f64,
    pub show_legend: bool,
    /// Category → color; unknown categories get the fallback.
    pub colors: Vec<(String, String)>,
    pub tick_count: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            width: TREND_WIDTH,
            height: TREND_HEIGHT,
            show_legend: true,
            colors: TREND_COLORS.iter().map(|(k, v)| (s!(*k), s!(*v))).collect(),
            tick_count: 5,
        }
    }
}

impl TrendConfig {
    pub fn margins(&self) -> Margins {
        Margins::new(40.0, if self.show_legend { 120.0 } else { 40.0 }, 60.0, 70.0)
    }

    pub fn color_for(&self, category: &str) -> String {
        self.colors
            .iter()
            .find(|(k, _)| k == category)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| s!(TREND_FALLBACK_COLOR))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendMarker {
    pub year: f64,
    pub value: f64,
    pub label: String,
    pub at: Point,
    pub value_text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendSeries {
    pub category: String,
    pub color: String,
    /// Sorted by year; consecutive markers form the line.
    pub markers: Vec<TrendMarker>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendGeometry {
    pub width: f64,
    pub height: f64,
    pub plot: Rect,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub x_ticks: Vec<Tick>,
    /// Also where the dashed horizontal grid lines go.
    pub y_ticks: Vec<Tick>,
    pub series: Vec<TrendSeries>,
    /// Top-left of the legend block, when shown.
    pub legend_origin: Option<Point>,
}

fn finite_extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

pub fn trend_chart(data: &[TrendPoint], cfg: &TrendConfig) -> TrendGeometry {
    let margins = cfg.margins();
    let plot = margins.inner(cfg.width, cfg.height);

    let (y0, y1) = finite_extent(data.iter().map(|p| p.year)).unwrap_or((0.0, 1.0));
    let vmax = finite_extent(data.iter().map(|p| p.value)).map(|(_, hi)| hi).unwrap_or(1.0);

    // Pixel ranges are relative to the plot origin; markers are made absolute below.
    let x_scale = LinearScale::new((y0, y1), (0.0, plot.width)).nice(10);
    let y_scale = LinearScale::new((0.0, vmax), (plot.height, 0.0)).nice(10);

    let ticks = |sc: &LinearScale, offset: f64| {
        sc.ticks(cfg.tick_count)
            .into_iter()
            .map(|v| Tick { value: v, position: offset + sc.map(v), label: format_value(v) })
            .collect::<Vec<_>>()
    };

    let series = unique_in_order(data.iter().map(|p| p.category.as_str()))
        .into_iter()
        .map(|category| {
            let mut pts: Vec<&TrendPoint> = data.iter().filter(|p| p.category == category).collect();
            pts.sort_by(|a, b| a.year.total_cmp(&b.year));
            TrendSeries {
                color: cfg.color_for(&category),
                markers: pts
                    .into_iter()
                    .map(|p| TrendMarker {
                        year: p.year,
                        value: p.value,
                        label: p.label.clone(),
                        at: Point::new(plot.x + x_scale.map(p.year), plot.y + y_scale.map(p.value)),
                        value_text: format!("{}%", format_value(p.value)),
                    })
                    .collect(),
                category,
            }
        })
        .collect();

    TrendGeometry {
        width: cfg.width,
        height: cfg.height,
        plot,
        x_ticks: ticks(&x_scale, plot.x),
        y_ticks: ticks(&y_scale, plot.y),
        x_scale,
        y_scale,
        series,
        legend_origin: cfg
            .show_legend
            .then(|| Point::new(cfg.width - margins.right + 30.0, margins.top)),
    }
}
