// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use super::app::App;

pub mod domains;
pub mod explorer;
pub mod skills;
pub mod trends;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// One-line description under the tab strip.
    fn subtitle(&self) -> &'static str { "" }

    /// Draw the whole page body. Runs every frame; must not block.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}

/// Reveal progress for a chart about to be drawn at the cursor with `size`.
pub(crate) fn reveal(ui: &egui::Ui, app: &mut App, key: &'static str, size: egui::Vec2) -> f32 {
    let rect = egui::Rect::from_min_size(ui.cursor().min, size);
    app.reveal.progress(ui, key, rect)
}
