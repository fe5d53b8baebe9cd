// src/gui/pages/domains.rs
use eframe::egui::{self, RichText};
use log::info;

use crate::config::options::PageKind;
use crate::geometry::{BarConfig, HeatmapConfig, Orientation, PackConfig, bar_chart, heatmap, pack_bubbles};
use crate::gui::app::App;
use crate::gui::components::{charts, load_status::{Gate, gate}};
use crate::gui::load::LoadState;
use crate::gui::router;
use crate::search::JobQuery;
use crate::showcase;

use super::{Page, reveal};

pub struct DomainsPage;
pub static PAGE: DomainsPage = DomainsPage;

impl Page for DomainsPage {
    fn title(&self) -> &'static str { "Domains" }
    fn kind(&self) -> PageKind { PageKind::Domains }
    fn subtitle(&self) -> &'static str {
        "Which sectors are most exposed, which task types within them, and the roles at the sharp end."
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        sectors(ui, app);
        ui.separator();
        heat(ui, app);
        ui.separator();
        bubbles(ui, app);
    }
}

fn sectors(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Automation potential by sector");

    let data = match gate(ui, &app.data.sectors, "sector data", true) {
        Gate::Ready(v) => v,
        Gate::Retry => {
            app.data.load_sectors(ui.ctx(), &app.state.options.source);
            return;
        }
        Gate::Fallback => {
            info!("UI: Sectors using built-in figures");
            app.data.sectors.set(LoadState::Ready(showcase::fallback_sectors().into()));
            return;
        }
        Gate::Wait => return,
    };

    let o = &mut app.state.gui.bar_orientation;
    ui.horizontal(|ui| {
        ui.radio_value(o, Orientation::Vertical, "Columns");
        ui.radio_value(o, Orientation::Horizontal, "Rows");
    });

    let width = (ui.available_width() - 140.0).clamp(320.0, 900.0) as f64;
    let cfg = match app.state.gui.bar_orientation {
        Orientation::Vertical => BarConfig { width, ..BarConfig::default() },
        Orientation::Horizontal => BarConfig {
            width,
            height: data.len() as f64 * 40.0 + 20.0,
            orientation: Orientation::Horizontal,
            ..BarConfig::default()
        },
    };
    let g = bar_chart(&data, &cfg);
    let t = reveal(ui, app, "domains_bars", egui::vec2(g.width as f32, g.height as f32));
    charts::bar_chart(ui, &g, t);
}

fn heat(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Automation risk by domain and task type");
    let g = heatmap(&showcase::heat_cells(), &HeatmapConfig::default());
    let t = reveal(ui, app, "domains_heat", egui::vec2(g.width as f32, g.height as f32));
    charts::heatmap(ui, &g, t);
}

fn bubbles(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Roles by automation risk");
    let data = showcase::bubbles();
    let g = pack_bubbles(&data, &PackConfig::default());
    let t = reveal(ui, app, "domains_bubbles", egui::vec2(g.width as f32, g.height as f32));

    let sel = app.state.gui.selected_bubble.clone();
    if let Some(id) = charts::bubbles(ui, &g, t, sel.as_deref()) {
        info!("UI: Bubble {}", id);
        app.state.gui.selected_bubble = if sel.as_deref() == Some(id.as_str()) { None } else { Some(id) };
    }

    ui.horizontal_wrapped(|ui| {
        for (cat, color) in &g.legend {
            ui.label(RichText::new("●").color(charts::c32(*color)));
            ui.label(cat);
        }
    });

    if let Some(b) = sel.and_then(|id| data.into_iter().find(|b| b.id == id)) {
        ui.group(|ui| {
            ui.strong(format!("{} ({})", b.label, b.category));
            if let Some(d) = &b.description {
                ui.label(d);
            }
            if ui.button("Find in explorer").clicked() {
                info!("UI: Explorer search {:?}", b.label);
                let ex = &mut app.state.gui.explorer;
                ex.query = JobQuery { term: b.label.clone(), ..Default::default() };
                ex.selected = None;
                app.set_current_index(router::index_of(&PageKind::Explorer));
            }
        });
    }
}
