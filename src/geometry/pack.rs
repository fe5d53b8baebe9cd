// src/geometry/pack.rs
//! Bubble chart: circles with area proportional to value, packed without
//! overlap and scaled to fit a `width × height` box.
//!
//! Placement is greedy. Circles go in largest first; each new circle is
//! tried at every spot where it touches two already placed circles (plus
//! one spot just right of everything, which always fits), and the
//! candidate closest to the origin that overlaps nothing wins. The packed
//! cluster is then scaled uniformly into the box. Padding is specified in
//! output pixels, so it depends on the scale; a few passes let the two
//! settle.
use serde::{Deserialize, Serialize};

use super::Point;
use super::color::Rgb;
use super::scale::unique_in_order;
use crate::config::consts::{BUBBLE_HEIGHT, BUBBLE_PADDING, BUBBLE_PALETTE, BUBBLE_WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub category: String,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl Bubble {
    pub fn new(id: &str, label: &str, value: f64, category: &str) -> Self {
        Self {
            id: s!(id),
            label: s!(label),
            value,
            category: s!(category),
            color: None,
            description: None,
        }
    }

    pub fn with_description(mut self, text: &str) -> Self {
        self.description = Some(s!(text));
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PackConfig {
    pub width: f64,
    pub height: f64,
    /// Minimum gap between neighbouring circles, in output pixels.
    pub padding: f64,
    pub palette: Vec<Rgb>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            width: BUBBLE_WIDTH,
            height: BUBBLE_HEIGHT,
            padding: BUBBLE_PADDING,
            palette: BUBBLE_PALETTE.iter().filter_map(|c| Rgb::parse_hex(c)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PackedBubble {
    pub id: String,
    pub label: String,
    pub category: String,
    pub value: f64,
    pub description: Option<String>,
    pub center: Point,
    pub r: f64,
    pub fill: Rgb,
    pub stroke: Rgb,
    pub font_size: f64,
    /// Big enough to also print the value under the label.
    pub show_value: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BubbleGeometry {
    pub width: f64,
    pub height: f64,
    pub bubbles: Vec<PackedBubble>,
    /// Category → color, first-seen order.
    pub legend: Vec<(String, Rgb)>,
}

const PADDING_PASSES: usize = 3;
const EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug)]
struct Circle {
    c: Point,
    r: f64,
}

fn overlaps(a: Circle, b: Circle) -> bool {
    a.c.distance(b.c) < a.r + b.r - EPS * (a.r + b.r).max(1.0)
}

/// Centres where a circle of radius `r` touches both `a` and `b` from outside.
fn tangent_spots(a: Circle, b: Circle, r: f64) -> Vec<Point> {
    let da = a.r + r;
    let db = b.r + r;
    let dx = b.c.x - a.c.x;
    let dy = b.c.y - a.c.y;
    let d = dx.hypot(dy);
    if d <= EPS || d > da + db || d < (da - db).abs() {
        return Vec::new();
    }
    let along = (da * da - db * db + d * d) / (2.0 * d);
    let h = (da * da - along * along).max(0.0).sqrt();
    let mx = a.c.x + along * dx / d;
    let my = a.c.y + along * dy / d;
    let (ox, oy) = (-dy * h / d, dx * h / d);
    vec![Point::new(mx + ox, my + oy), Point::new(mx - ox, my - oy)]
}

/// Greedy placement of radii already sorted largest first.
fn place(radii: &[f64]) -> Vec<Circle> {
    let mut placed: Vec<Circle> = Vec::with_capacity(radii.len());

    for &r in radii {
        if placed.is_empty() {
            placed.push(Circle { c: Point::ORIGIN, r });
            continue;
        }

        let right = placed.iter().map(|p| p.c.x + p.r).fold(f64::NEG_INFINITY, f64::max);
        let mut best = Point::new(right + r, 0.0);
        let mut best_d = best.distance(Point::ORIGIN);

        for i in 0..placed.len() {
            for j in i + 1..placed.len() {
                for spot in tangent_spots(placed[i], placed[j], r) {
                    let d = spot.distance(Point::ORIGIN);
                    if d < best_d && !placed.iter().any(|p| overlaps(*p, Circle { c: spot, r })) {
                        best = spot;
                        best_d = d;
                    }
                }
            }
        }
        // Beside the first circle, for the two-circle case.
        let beside = Point::new(placed[0].c.x + placed[0].r + r, placed[0].c.y);
        let d = beside.distance(Point::ORIGIN);
        if d < best_d && !placed.iter().any(|p| overlaps(*p, Circle { c: beside, r })) {
            best = beside;
        }

        placed.push(Circle { c: best, r });
    }
    placed
}

/// (min x, min y, max x, max y)
fn bounds(circles: &[Circle]) -> (f64, f64, f64, f64) {
    circles.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(x0, y0, x1, y1), c| (x0.min(c.c.x - c.r), y0.min(c.c.y - c.r), x1.max(c.c.x + c.r), y1.max(c.c.y + c.r)),
    )
}

fn fit_scale(b: (f64, f64, f64, f64), width: f64, height: f64) -> f64 {
    let bw = b.2 - b.0;
    let bh = b.3 - b.1;
    if bw <= 0.0 || bh <= 0.0 {
        return 0.0;
    }
    (width / bw).min(height / bh)
}

/// Radius in unit space before scaling: area ∝ value.
fn base_radius(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value.sqrt() } else { 0.0 }
}

pub fn pack_bubbles(data: &[Bubble], cfg: &PackConfig) -> BubbleGeometry {
    let categories = unique_in_order(data.iter().map(|b| b.category.as_str()));
    let fallback = Rgb::new(0x93, 0x81, 0xff);
    let category_color = |cat: &str| {
        let idx = categories.iter().position(|c| c == cat).unwrap_or(0);
        cfg.palette.get(idx % cfg.palette.len().max(1)).copied().unwrap_or(fallback)
    };

    // Only positive values take part; the order is largest first, stable.
    let mut order: Vec<usize> = (0..data.len()).filter(|&i| base_radius(data[i].value) > 0.0).collect();
    order.sort_by(|&a, &b| base_radius(data[b].value).total_cmp(&base_radius(data[a].value)));
    let radii: Vec<f64> = order.iter().map(|&i| base_radius(data[i].value)).collect();

    let mut pad = 0.0;
    let mut circles = Vec::new();
    let mut k = 0.0;
    for _ in 0..PADDING_PASSES {
        let padded: Vec<f64> = radii.iter().map(|r| r + pad / 2.0).collect();
        circles = place(&padded);
        k = fit_scale(bounds(&circles), cfg.width, cfg.height);
        if k <= 0.0 || cfg.padding <= 0.0 {
            break;
        }
        pad = cfg.padding / k;
    }

    let b = bounds(&circles);
    let (bx, by) = ((b.0 + b.2) / 2.0, (b.1 + b.3) / 2.0);
    let mid = Point::new(cfg.width / 2.0, cfg.height / 2.0);

    let mut centers = vec![mid; data.len()];
    let mut scaled = vec![0.0; data.len()];
    for (slot, &i) in order.iter().enumerate() {
        let c = circles[slot];
        centers[i] = Point::new(mid.x + (c.c.x - bx) * k, mid.y + (c.c.y - by) * k);
        scaled[i] = radii[slot] * k;
    }

    let bubbles = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let fill = d
                .color
                .as_deref()
                .and_then(Rgb::parse_hex)
                .unwrap_or_else(|| category_color(&d.category));
            let r = scaled[i];
            PackedBubble {
                id: d.id.clone(),
                label: d.label.clone(),
                category: d.category.clone(),
                value: d.value,
                description: d.description.clone(),
                center: centers[i],
                r,
                fill,
                stroke: fill.darker(0.3),
                font_size: (r / 2.5).min(14.0),
                show_value: r > 30.0,
            }
        })
        .collect();

    let legend = categories.iter().map(|c| (c.clone(), category_color(c))).collect();

    BubbleGeometry { width: cfg.width, height: cfg.height, bubbles, legend }
}
