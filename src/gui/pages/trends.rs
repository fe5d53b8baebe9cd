// src/gui/pages/trends.rs
use eframe::egui::{self, RichText};
use log::info;

use crate::config::options::PageKind;
use crate::geometry::{GaugeConfig, IsotypeConfig, TrendConfig, gauge, isotype, timeline, trend_chart};
use crate::gui::app::App;
use crate::gui::components::{charts, load_status::{Gate, gate}};
use crate::gui::load::LoadState;
use crate::showcase;

use super::{Page, reveal};

pub struct TrendsPage;
pub static PAGE: TrendsPage = TrendsPage;

impl Page for TrendsPage {
    fn title(&self) -> &'static str { "Trends" }
    fn kind(&self) -> PageKind { PageKind::Trends }
    fn subtitle(&self) -> &'static str {
        "How the job market is projected to shift through 2030."
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Projected impact (% of workforce)");
        let width = (ui.available_width() as f64).clamp(480.0, 900.0);
        let g = trend_chart(&showcase::trend_points(), &TrendConfig { width, ..TrendConfig::default() });
        let t = reveal(ui, app, "trends_line", egui::vec2(g.width as f32, g.height as f32));
        charts::trend(ui, &g, t);

        ui.separator();
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.strong("Roles transformed by AI");
                let g = gauge(showcase::TRANSFORMED_ROLES_PCT, &GaugeConfig::default());
                let t = reveal(ui, app, "trends_gauge", egui::Vec2::splat(g.size as f32));
                charts::gauge(ui, &g, t);
            });
            ui.separator();
            ui.vertical(|ui| {
                ui.strong("Workers needing reskilling");
                let cfg = IsotypeConfig::default();
                let g = isotype(showcase::RESKILLED_WORKERS_PCT, &cfg);
                let size = egui::vec2(cfg.columns as f32, cfg.rows as f32) * cfg.cell_size as f32;
                let t = reveal(ui, app, "trends_isotype", size);
                charts::isotype(ui, &g, cfg.cell_size as f32, t);
                ui.label(RichText::new(format!("{} of workers", g.caption)).weak());
            });
        });

        ui.separator();
        ui.heading("Timeline");
        let events = match gate(ui, &app.data.timeline, "timeline events", true) {
            Gate::Ready(v) => v,
            Gate::Retry => {
                app.data.load_timeline(ui.ctx(), &app.state.options.source);
                return;
            }
            Gate::Fallback => {
                info!("UI: Timeline using built-in events");
                app.data.timeline.set(LoadState::Ready(showcase::fallback_timeline().into()));
                return;
            }
            Gate::Wait => return,
        };
        let entries = timeline(&events);
        let t = reveal(ui, app, "trends_timeline", egui::vec2(ui.available_width(), 200.0));
        charts::timeline(ui, &entries, t);
    }
}
