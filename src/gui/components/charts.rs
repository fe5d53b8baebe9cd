// src/gui/components/charts.rs
//
// Paints geometry produced by `crate::geometry` into egui. Every function
// takes final-state geometry plus a reveal progress `t` in 0..=1 and only
// uses `t` to decide how much to paint. No layout math lives here.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2, pos2, vec2};

use crate::config::consts::{ACCENT_COLOR, HEATMAP_DARK_TEXT};
use crate::geometry::{
    BarChartGeometry, BubbleGeometry, GaugeGeometry, HeatmapGeometry, IsotypeGeometry, Orientation, Point,
    RadarGeometry, Rgb, TrendGeometry, timeline::{Side, TimelineEntry},
};

const GRID: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
const AXIS_TEXT: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63);
const MUTED: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);

pub fn c32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

pub fn hex(text: &str) -> Color32 {
    Rgb::parse_hex(text).map(c32).unwrap_or(Color32::GRAY)
}

fn at(origin: Pos2, p: Point) -> Pos2 {
    origin + vec2(p.x as f32, p.y as f32)
}

fn rect_at(origin: Pos2, r: &crate::geometry::Rect) -> Rect {
    Rect::from_min_size(at(origin, Point::new(r.x, r.y)), vec2(r.width as f32, r.height as f32))
}

fn text_color(ui: &egui::Ui) -> Color32 {
    ui.visuals().text_color()
}

/* ---------------- Gauge ---------------- */

pub fn gauge(ui: &mut egui::Ui, g: &GaugeGeometry, t: f32) {
    let side = g.size as f32;
    let (resp, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
    let center = at(resp.rect.min, g.center);
    let width = g.stroke_width as f32;

    painter.circle_stroke(center, g.radius as f32, Stroke::new(width, hex(&g.track_color)));

    let pts = g.arc_points(96);
    if pts.len() >= 2 {
        let shown = (((pts.len() - 1) as f32 * t).round() as usize + 1).min(pts.len());
        if shown >= 2 {
            let line: Vec<Pos2> = pts[..shown].iter().map(|p| at(center, *p)).collect();
            painter.add(Shape::line(line, Stroke::new(width, hex(&g.color))));
        }
    }

    painter.text(center + vec2(0.0, -6.0), Align2::CENTER_CENTER, &g.text, FontId::proportional(28.0), text_color(ui));
    painter.text(center + vec2(0.0, 22.0), Align2::CENTER_CENTER, g.label, FontId::proportional(14.0), MUTED);
}

/* ---------------- Bar chart ---------------- */

pub fn bar_chart(ui: &mut egui::Ui, g: &BarChartGeometry, t: f32) {
    let label_band = 28.0;
    let label_col = 110.0;
    let size = match g.orientation {
        Orientation::Vertical => vec2(g.width as f32, g.height as f32 + label_band),
        Orientation::Horizontal => vec2(g.width as f32 + label_col, g.height as f32),
    };
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = match g.orientation {
        Orientation::Vertical => resp.rect.min,
        Orientation::Horizontal => resp.rect.min + vec2(label_col, 0.0),
    };

    for (_, y) in &g.grid_lines {
        let y = origin.y + *y as f32;
        let pts = [pos2(origin.x, y), pos2(origin.x + g.width as f32, y)];
        painter.extend(Shape::dashed_line(&pts, Stroke::new(1.0, GRID), 4.0, 4.0));
    }

    for (i, bar) in g.bars.iter().enumerate() {
        let full = rect_at(origin, &bar.rect);
        let shown = match g.orientation {
            Orientation::Vertical => {
                Rect::from_min_max(pos2(full.min.x, full.max.y - full.height() * t), full.max)
            }
            Orientation::Horizontal => {
                Rect::from_min_size(full.min, vec2(full.width() * t, full.height()))
            }
        };
        painter.rect_filled(shown, 3.0, hex(&bar.color));

        match g.orientation {
            Orientation::Vertical => {
                painter.text(pos2(full.center().x, shown.min.y - 4.0), Align2::CENTER_BOTTOM, &bar.value_text, FontId::proportional(12.0), text_color(ui));
                painter.text(pos2(full.center().x, origin.y + g.height as f32 + 6.0), Align2::CENTER_TOP, &bar.label, FontId::proportional(12.0), AXIS_TEXT);
            }
            Orientation::Horizontal => {
                painter.text(pos2(shown.max.x + 4.0, full.center().y), Align2::LEFT_CENTER, &bar.value_text, FontId::proportional(12.0), text_color(ui));
                painter.text(pos2(origin.x - 6.0, full.center().y), Align2::RIGHT_CENTER, &bar.label, FontId::proportional(12.0), AXIS_TEXT);
            }
        }

        if let Some(desc) = &bar.description {
            ui.interact(full, ui.id().with(("bar", i)), Sense::hover())
                .on_hover_text(format!("{}: {}", bar.label, desc));
        }
    }
}

/* ---------------- Heatmap ---------------- */

pub fn heatmap(ui: &mut egui::Ui, g: &HeatmapGeometry, t: f32) {
    let (resp, painter) = ui.allocate_painter(vec2(g.width as f32, g.height as f32), Sense::hover());
    let origin = resp.rect.min;

    for (i, cell) in g.cells.iter().enumerate() {
        let r = rect_at(origin, &cell.rect);
        painter.rect_filled(r, 2.0, c32(cell.fill).gamma_multiply(t));
        painter.text(r.center(), Align2::CENTER_CENTER, &cell.label, FontId::proportional(12.0), c32(cell.text_color).gamma_multiply(t));
        if let Some(tip) = &cell.tooltip {
            ui.interact(r, ui.id().with(("cell", i)), Sense::hover())
                .on_hover_text(format!("{} × {}: {}\n{}", cell.x, cell.y, cell.label, tip));
        }
    }

    let plot = rect_at(origin, &g.plot);
    for l in &g.x_labels {
        painter.text(pos2(origin.x + l.position as f32, plot.max.y + 8.0), Align2::CENTER_TOP, &l.text, FontId::proportional(11.0), AXIS_TEXT);
    }
    for l in &g.y_labels {
        painter.text(pos2(plot.min.x - 6.0, origin.y + l.position as f32), Align2::RIGHT_CENTER, &l.text, FontId::proportional(11.0), AXIS_TEXT);
    }

    // Legend gradient in thin slices.
    let lr = rect_at(origin, &g.legend.rect);
    let slices = 24;
    let w = lr.width() / slices as f32;
    for s in 0..slices {
        let c = g.legend.low.lerp(g.legend.high, (s as f64 + 0.5) / slices as f64);
        let r = Rect::from_min_size(pos2(lr.min.x + w * s as f32, lr.min.y), vec2(w + 0.5, lr.height()));
        painter.rect_filled(r, 0.0, c32(c));
    }
    painter.text(pos2(lr.min.x, lr.min.y - 3.0), Align2::LEFT_BOTTOM, "Automation Risk (%)", FontId::proportional(10.0), text_color(ui));
    for (_, x, label) in &g.legend.ticks {
        painter.text(pos2(lr.min.x + *x as f32, lr.max.y + 2.0), Align2::CENTER_TOP, label, FontId::proportional(9.0), MUTED);
    }
}

/* ---------------- Radar ---------------- */

pub fn radar(ui: &mut egui::Ui, g: &RadarGeometry, t: f32) {
    let (resp, painter) = ui.allocate_painter(Vec2::splat(g.size as f32), Sense::hover());
    let center = at(resp.rect.min, g.center);

    for ring in &g.rings {
        let r = ring.radius as f32;
        let n = 72;
        let pts: Vec<Pos2> = (0..=n)
            .map(|i| {
                let a = i as f32 / n as f32 * std::f32::consts::TAU;
                center + vec2(r * a.cos(), r * a.sin())
            })
            .collect();
        painter.extend(Shape::dashed_line(&pts, Stroke::new(1.0, GRID), 4.0, 4.0));
        painter.text(center + vec2(0.0, -r - 4.0), Align2::CENTER_BOTTOM, &ring.label, FontId::proportional(10.0), MUTED);
    }

    for axis in &g.axes {
        painter.line_segment([center, at(center, axis.end)], Stroke::new(1.0, GRID));
        painter.text(at(center, axis.label_pos), Align2::CENTER_CENTER, &axis.label, FontId::proportional(12.0), AXIS_TEXT);
    }

    for poly in &g.polygons {
        let color = hex(&poly.color);
        let pts: Vec<Pos2> = poly
            .points
            .iter()
            .map(|p| at(center, Point::new(p.x * t as f64, p.y * t as f64)))
            .collect();
        if pts.len() < 3 {
            continue;
        }
        // Fan from the centre: each wedge is convex even when the outline is not.
        let fill = color.gamma_multiply(0.2);
        for i in 0..pts.len() {
            let j = (i + 1) % pts.len();
            painter.add(Shape::convex_polygon(vec![center, pts[i], pts[j]], fill, Stroke::NONE));
        }
        painter.add(Shape::closed_line(pts.clone(), Stroke::new(2.0, color)));
        for p in &pts {
            painter.circle(*p, 5.0, color, Stroke::new(2.0, Color32::WHITE));
        }
    }

    // Legend, top right of the plot.
    let legend = center + vec2(g.radius as f32 + 20.0, -(g.radius as f32) + 30.0);
    for (i, poly) in g.polygons.iter().enumerate() {
        let y = legend.y + i as f32 * 25.0;
        painter.rect_filled(Rect::from_min_size(pos2(legend.x, y), Vec2::splat(15.0)), 0.0, hex(&poly.color));
        painter.text(pos2(legend.x + 25.0, y + 7.5), Align2::LEFT_CENTER, &poly.name, FontId::proportional(12.0), AXIS_TEXT);
    }
}

/* ---------------- Bubbles ---------------- */

/// Returns the id of a bubble clicked this frame.
pub fn bubbles(ui: &mut egui::Ui, g: &BubbleGeometry, t: f32, selected: Option<&str>) -> Option<String> {
    let (resp, painter) = ui.allocate_painter(vec2(g.width as f32, g.height as f32), Sense::hover());
    let origin = resp.rect.min;
    let mut clicked = None;

    for b in &g.bubbles {
        if b.r <= 0.0 {
            continue;
        }
        let c = at(origin, b.center);
        let r = b.r as f32 * t;
        let is_sel = selected == Some(b.id.as_str());
        let fill = c32(b.fill).gamma_multiply(if is_sel { 1.0 } else { 0.8 });
        painter.circle(c, r, fill, Stroke::new(if is_sel { 3.0 } else { 1.5 }, c32(b.stroke)));

        let font = b.font_size as f32;
        if font >= 6.0 && t >= 1.0 {
            let dy = if b.show_value { -font * 0.4 } else { 0.0 };
            painter.text(c + vec2(0.0, dy), Align2::CENTER_CENTER, &b.label, FontId::proportional(font), Color32::WHITE);
            if b.show_value {
                painter.text(c + vec2(0.0, font * 0.8), Align2::CENTER_CENTER, format!("{}%", b.value), FontId::proportional(font * 0.9), Color32::WHITE);
            }
        }

        let hit = Rect::from_center_size(c, Vec2::splat(2.0 * b.r as f32));
        let mut r = ui.interact(hit, ui.id().with(("bubble", &b.id)), Sense::click());
        if let Some(desc) = &b.description {
            r = r.on_hover_text(format!("{} ({})\n{}", b.label, b.category, desc));
        }
        if r.clicked() && c.distance(r.interact_pointer_pos().unwrap_or(c)) <= b.r as f32 {
            clicked = Some(b.id.clone());
        }
    }
    clicked
}

/* ---------------- Trend ---------------- */

pub fn trend(ui: &mut egui::Ui, g: &TrendGeometry, t: f32) {
    let (resp, painter) = ui.allocate_painter(vec2(g.width as f32, g.height as f32), Sense::hover());
    let origin = resp.rect.min;
    let plot = rect_at(origin, &g.plot);

    for tick in &g.y_ticks {
        let y = origin.y + tick.position as f32;
        painter.extend(Shape::dashed_line(&[pos2(plot.min.x, y), pos2(plot.max.x, y)], Stroke::new(1.0, GRID), 3.0, 3.0));
        painter.text(pos2(plot.min.x - 8.0, y), Align2::RIGHT_CENTER, &tick.label, FontId::proportional(11.0), AXIS_TEXT);
    }
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], Stroke::new(1.0, AXIS_TEXT));
    painter.line_segment([plot.left_top(), plot.left_bottom()], Stroke::new(1.0, AXIS_TEXT));
    for tick in &g.x_ticks {
        let x = origin.x + tick.position as f32;
        painter.text(pos2(x, plot.max.y + 6.0), Align2::CENTER_TOP, &tick.label, FontId::proportional(11.0), AXIS_TEXT);
    }

    for (si, series) in g.series.iter().enumerate() {
        let color = hex(&series.color);
        let pts: Vec<Pos2> = series.markers.iter().map(|m| at(origin, m.at)).collect();
        if pts.is_empty() {
            continue;
        }
        // Draw the line progressively along its segments.
        let span = (pts.len() - 1) as f32 * t;
        let whole = span.floor() as usize;
        let mut line: Vec<Pos2> = pts[..=whole.min(pts.len() - 1)].to_vec();
        if whole + 1 < pts.len() {
            let f = span - whole as f32;
            line.push(pts[whole] + (pts[whole + 1] - pts[whole]) * f);
        }
        if line.len() >= 2 {
            painter.add(Shape::line(line, Stroke::new(3.0, color)));
        }

        for (mi, (m, p)) in series.markers.iter().zip(&pts).enumerate() {
            if (mi as f32) > span + 1e-3 {
                break;
            }
            painter.circle(*p, 6.0, color, Stroke::new(2.0, Color32::WHITE));
            painter.text(*p - vec2(0.0, 15.0), Align2::CENTER_BOTTOM, &m.value_text, FontId::proportional(11.0), color);
            let r = ui.interact(Rect::from_center_size(*p, Vec2::splat(16.0)), ui.id().with(("trend", si, mi)), Sense::hover());
            r.on_hover_text(format!("{}\n{} in {}\n{}", series.category, m.value_text, m.year, m.label));
        }
    }

    if let Some(lo) = g.legend_origin {
        let lo = at(origin, lo);
        for (i, series) in g.series.iter().enumerate() {
            let y = lo.y + i as f32 * 30.0;
            painter.circle_filled(pos2(lo.x + 6.0, y + 6.0), 6.0, hex(&series.color));
            painter.text(pos2(lo.x + 18.0, y + 6.0), Align2::LEFT_CENTER, &series.category, FontId::proportional(11.0), AXIS_TEXT);
        }
    }
}

/* ---------------- Isotype ---------------- */

pub fn isotype(ui: &mut egui::Ui, g: &IsotypeGeometry, cell: f32, t: f32) {
    let cols = g.cells.iter().map(|c| c.column + 1).max().unwrap_or(0) as f32;
    let rows = g.cells.iter().map(|c| c.row + 1).max().unwrap_or(0) as f32;
    let (resp, painter) = ui.allocate_painter(vec2(cols * cell, rows * cell), Sense::hover());
    let origin = resp.rect.min;
    let lit = (g.active as f32 * t).round() as usize;
    let on = hex(ACCENT_COLOR);
    let off = hex(HEATMAP_DARK_TEXT).gamma_multiply(0.2);

    // A small person: head over shoulders.
    for c in &g.cells {
        let color = if c.active && c.index < lit { on } else { off };
        let p = at(origin, c.center);
        painter.circle_filled(p - vec2(0.0, cell * 0.2), cell * 0.14, color);
        let body = Rect::from_center_size(p + vec2(0.0, cell * 0.15), vec2(cell * 0.42, cell * 0.3));
        painter.rect_filled(body, cell * 0.12, color);
    }
}

/* ---------------- Timeline ---------------- */

pub fn timeline(ui: &mut egui::Ui, entries: &[TimelineEntry], t: f32) {
    for e in entries {
        let shown = (e.index as f32) < t * entries.len() as f32 + 0.5;
        ui.columns(2, |cols| {
            let col = match e.side {
                Side::Left => 0,
                Side::Right => 1,
            };
            let ui = &mut cols[col];
            if !shown {
                ui.set_opacity(0.0);
            }
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    let (dot, _) = ui.allocate_exact_size(Vec2::splat(14.0), Sense::hover());
                    ui.painter().circle_filled(dot.center(), 7.0, hex(&e.marker_color));
                    if let Some(icon) = &e.icon {
                        ui.label(icon);
                    }
                    ui.strong(&e.year);
                });
                ui.label(egui::RichText::new(&e.title).strong());
                ui.label(&e.description);
            });
        });
        ui.add_space(6.0);
    }
}
