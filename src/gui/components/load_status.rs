// src/gui/components/load_status.rs
//
// Loading / failed affordances shared by every page. Pages call `gate`
// and only draw their chart when it hands back data.

use std::sync::Arc;

use eframe::egui;

use crate::gui::load::{LoadState, Slot};

pub enum Gate<T> {
    Ready(Arc<[T]>),
    Retry,
    Fallback,
    Wait,
}

/// Spinner while loading; error text + Retry (and optionally built-in
/// data) when the load came back empty; the data otherwise.
pub fn gate<T>(ui: &mut egui::Ui, slot: &Slot<T>, what: &str, has_fallback: bool) -> Gate<T> {
    // Take a handle on the rows and let go of the lock before drawing.
    let ready = match &*slot.lock() {
        LoadState::Ready(v) => Ok(Arc::clone(v)),
        LoadState::Loading => Err(true),
        LoadState::Failed => Err(false),
    };
    match ready {
        Ok(v) => Gate::Ready(v),
        Err(true) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Loading {what}…"));
            });
            Gate::Wait
        }
        Err(false) => {
            let mut out = Gate::Wait;
            ui.group(|ui| {
                ui.colored_label(ui.visuals().error_fg_color, format!("Failed to load {what}."));
                ui.horizontal(|ui| {
                    if ui.button("Retry").clicked() {
                        out = Gate::Retry;
                    }
                    if has_fallback && ui.button("Use built-in figures").clicked() {
                        out = Gate::Fallback;
                    }
                });
            });
            out
        }
    }
}
