// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;
use log::info;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.heading("How Fast Will AI Take Your Job?");
        ui.separator();

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page().kind();
                app.set_current_index(idx);
                info!("UI: Tab switch {:?} → {:?}", prev, page.kind());
                page.on_enter(app);
            }
        }
    });

    let sub = app.current_page().subtitle();
    if !sub.is_empty() {
        ui.label(egui::RichText::new(sub).weak());
    }
}
