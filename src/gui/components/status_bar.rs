// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::{app::App, load::LoadState};

fn summary<T>(name: &str, state: &LoadState<T>) -> String {
    match state {
        LoadState::Loading => format!("{name}: loading…"),
        LoadState::Ready(v) => format!("{name}: {}", v.len()),
        LoadState::Failed => format!("{name}: failed"),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(format!("Source: {}", app.state.options.source.describe()));
        ui.separator();
        ui.label(summary("Jobs", &app.data.jobs.lock()));
        ui.label(summary("Sectors", &app.data.sectors.lock()));
        ui.label(summary("Skills", &app.data.skills.lock()));
        ui.label(summary("Timeline", &app.data.timeline.lock()));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Reload all").clicked() {
                app.reload_all(ui.ctx());
            }
        });
    });
}
