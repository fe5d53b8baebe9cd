// src/gui/reveal.rs
//
// Reveal-on-first-sight for charts. A chart's clock starts the first frame
// its rect is visible; progress then runs 0 → 1 over DURATION. Geometry is
// always computed final-state; this only scales how much of it is painted.

use std::collections::HashMap;

use eframe::egui;

const DURATION: f64 = 0.9;

#[derive(Default)]
pub struct Reveal {
    started: HashMap<&'static str, f64>,
}

impl Reveal {
    /// Progress for chart `key` drawn into `rect`, eased out.
    pub fn progress(&mut self, ui: &egui::Ui, key: &'static str, rect: egui::Rect) -> f32 {
        let now = ui.input(|i| i.time);
        if !ui.is_rect_visible(rect) && !self.started.contains_key(key) {
            return 0.0;
        }
        let start = *self.started.entry(key).or_insert(now);
        let t = ((now - start) / DURATION).clamp(0.0, 1.0);
        if t < 1.0 {
            ui.ctx().request_repaint();
        }
        let eased = 1.0 - (1.0 - t).powi(3);
        eased as f32
    }

    /// Replay one chart's reveal, e.g. when its subject changes.
    pub fn restart(&mut self, key: &'static str) {
        self.started.remove(key);
    }

    /// Replay every reveal (after data reloads).
    pub fn reset(&mut self) {
        self.started.clear();
    }
}
