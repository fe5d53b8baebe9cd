// src/gui/pages/skills.rs
use eframe::egui::{self, RichText};
use log::info;

use crate::config::options::PageKind;
use crate::geometry::{RadarConfig, RadarData, format_value, radar};
use crate::gui::app::App;
use crate::gui::components::{charts, load_status::{Gate, gate}};
use crate::gui::load::LoadState;
use crate::showcase;

use super::{Page, reveal};

pub struct SkillsPage;
pub static PAGE: SkillsPage = SkillsPage;

impl Page for SkillsPage {
    fn title(&self) -> &'static str { "Skills" }
    fn kind(&self) -> PageKind { PageKind::Skills }
    fn subtitle(&self) -> &'static str {
        "Skills that complement AI versus skills AI already covers."
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let cats = match gate(ui, &app.data.skills, "skills data", true) {
            Gate::Ready(v) => v,
            Gate::Retry => {
                app.data.load_skills(ui.ctx(), &app.state.options.source);
                return;
            }
            Gate::Fallback => {
                info!("UI: Skills using built-in figures");
                app.data.skills.set(LoadState::Ready(showcase::fallback_skills().into()));
                return;
            }
            Gate::Wait => return,
        };

        let g = radar(&RadarData::from_categories(&cats), &RadarConfig::default());
        let t = reveal(ui, app, "skills_radar", egui::Vec2::splat(g.size as f32));
        charts::radar(ui, &g, t);

        ui.separator();
        let n = cats.len().clamp(1, 3);
        ui.columns(n, |cols| {
            for (i, cat) in cats.iter().enumerate() {
                let ui = &mut cols[i % n];
                ui.strong(&cat.category);
                for sk in &cat.skills {
                    ui.horizontal(|ui| {
                        ui.label(&sk.name);
                        ui.label(RichText::new(format_value(sk.value)).weak());
                    });
                }
                ui.add_space(8.0);
            }
        });
    }
}
