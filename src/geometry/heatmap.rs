// src/geometry/heatmap.rs
use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::scale::{BandScale, LinearScale, unique_in_order};
use super::{Margins, Rect, format_value};
use crate::config::consts::*;

/// One input cell: column `x`, row `y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatCell {
    pub x: String,
    pub y: String,
    pub value: f64,
    pub tooltip: Option<String>,
}

impl HeatCell {
    pub fn new(x: &str, y: &str, value: f64, tooltip: Option<&str>) -> Self {
        Self { x: s!(x), y: s!(y), value, tooltip: tooltip.map(String::from) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub padding: f64,
    pub low_color: Rgb,
    pub high_color: Rgb,
}

pub const HEATMAP_MARGINS: Margins = Margins::new(50.0, 50.0, 70.0, 70.0);
const LEGEND_WIDTH: f64 = 120.0;
const LEGEND_HEIGHT: f64 = 12.0;
const LEGEND_Y: f64 = 20.0;

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            width: HEATMAP_WIDTH,
            height: HEATMAP_HEIGHT,
            margins: HEATMAP_MARGINS,
            padding: BAND_PADDING,
            low_color: Rgb::hex_or(HEATMAP_LOW_COLOR, Rgb::WHITE),
            high_color: Rgb::hex_or(HEATMAP_HIGH_COLOR, Rgb::new(0x93, 0x81, 0xff)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapCellGeometry {
    pub x: String,
    pub y: String,
    pub value: f64,
    pub rect: Rect,
    pub fill: Rgb,
    pub text_color: Rgb,
    pub label: String,
    pub tooltip: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisLabel {
    pub text: String,
    /// Centre of the band along its axis.
    pub position: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapLegend {
    pub rect: Rect,
    pub low: Rgb,
    pub high: Rgb,
    /// (value, x offset inside the legend, label)
    pub ticks: Vec<(f64, f64, String)>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapGeometry {
    pub width: f64,
    pub height: f64,
    pub plot: Rect,
    pub min: f64,
    pub max: f64,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    pub cells: Vec<HeatmapCellGeometry>,
    pub legend: HeatmapLegend,
}

/// Light text on cells above the middle of the observed value range.
pub fn wants_light_text(value: f64, min: f64, max: f64) -> bool {
    value > (max - min) / 2.0 + min
}

fn extent(cells: &[HeatCell]) -> (f64, f64) {
    let finite = cells.iter().map(|c| c.value).filter(|v| v.is_finite());
    let (lo, hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo.is_finite() { (lo, hi) } else { (0.0, 0.0) }
}

pub fn heatmap(cells: &[HeatCell], cfg: &HeatmapConfig) -> HeatmapGeometry {
    let plot = cfg.margins.inner(cfg.width, cfg.height);
    let xs = BandScale::new(
        unique_in_order(cells.iter().map(|c| c.x.as_str())),
        (plot.x, plot.x + plot.width),
        cfg.padding,
    );
    let ys = BandScale::new(
        unique_in_order(cells.iter().map(|c| c.y.as_str())),
        (plot.y, plot.y + plot.height),
        cfg.padding,
    );

    let (min, max) = extent(cells);
    let t = LinearScale::new((min, max), (0.0, 1.0));
    let light = Rgb::hex_or(HEATMAP_LIGHT_TEXT, Rgb::WHITE);
    let dark = Rgb::hex_or(HEATMAP_DARK_TEXT, Rgb::new(0x33, 0x33, 0x33));

    let geoms = cells
        .iter()
        .filter_map(|c| {
            let x = xs.position(&c.x)?;
            let y = ys.position(&c.y)?;
            Some(HeatmapCellGeometry {
                x: c.x.clone(),
                y: c.y.clone(),
                value: c.value,
                rect: Rect::new(x, y, xs.bandwidth(), ys.bandwidth()),
                fill: cfg.low_color.lerp(cfg.high_color, t.map(c.value)),
                text_color: if wants_light_text(c.value, min, max) { light } else { dark },
                label: format!("{}%", format_value(c.value)),
                tooltip: c.tooltip.clone(),
            })
        })
        .collect();

    let labels = |band: &BandScale| {
        band.domain
            .iter()
            .enumerate()
            .map(|(i, d)| AxisLabel { text: d.clone(), position: band.center_at(i) })
            .collect::<Vec<_>>()
    };

    let legend_scale = LinearScale::new((min, max), (0.0, LEGEND_WIDTH));
    let legend = HeatmapLegend {
        rect: Rect::new(cfg.width - cfg.margins.right - LEGEND_WIDTH, LEGEND_Y, LEGEND_WIDTH, LEGEND_HEIGHT),
        low: cfg.low_color,
        high: cfg.high_color,
        ticks: legend_scale
            .ticks(5)
            .into_iter()
            .map(|v| (v, legend_scale.map(v), format!("{}%", format_value(v))))
            .collect(),
    };

    HeatmapGeometry {
        width: cfg.width,
        height: cfg.height,
        plot,
        min,
        max,
        x_labels: labels(&xs),
        y_labels: labels(&ys),
        cells: geoms,
        legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_rule() {
        assert!(wants_light_text(80.0, 20.0, 100.0));
        assert!(!wants_light_text(60.0, 20.0, 100.0));
        assert!(!wants_light_text(50.0, 50.0, 50.0));
    }

    #[test]
    fn cells_follow_first_seen_bands() {
        let cells = vec![
            HeatCell::new("Tech", "Coding", 80.0, None),
            HeatCell::new("Health", "Coding", 20.0, Some("low")),
            HeatCell::new("Tech", "Care", 40.0, None),
        ];
        let g = heatmap(&cells, &HeatmapConfig::default());
        assert_eq!(g.x_labels.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(), vec!["Tech", "Health"]);
        assert_eq!((g.min, g.max), (20.0, 80.0));
        // 480 px wide plot split in two columns
        assert_eq!(g.cells[0].rect.x, 70.0);
        assert_eq!(g.cells[1].rect.x, 70.0 + 240.0);
        assert_eq!(g.cells[0].fill, HeatmapConfig::default().high_color);
        assert_eq!(g.cells[1].fill, HeatmapConfig::default().low_color);
        assert_eq!(g.cells[0].label, "80%");
        assert_eq!(g.cells[1].tooltip.as_deref(), Some("low"));
    }
}
