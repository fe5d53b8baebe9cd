// src/gui/app.rs
use std::error::Error;

use eframe::egui;
use log::info;

use crate::config::state::AppState;

use super::{
    load::Datasets,
    pages::Page,
    reveal::Reveal,
    router,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "How Fast Will AI Take Your Job?",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // shared with loader threads
    pub data: Datasets,

    // chart reveal clocks
    pub reveal: Reveal,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let data = Datasets::default();
        info!(
            "Init: source={}, schema={}",
            state.options.source.describe(),
            state.gui.explorer.schema.name()
        );
        data.load_all(ctx, &state.options.source, state.gui.explorer.schema);

        Self { state, data, reveal: Reveal::default() }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    pub fn reload_jobs(&mut self, ctx: &egui::Context) {
        self.state.gui.explorer.selected = None;
        self.data.load_jobs(ctx, &self.state.options.source, self.state.gui.explorer.schema);
    }

    pub fn reload_all(&mut self, ctx: &egui::Context) {
        info!("UI: Reload all datasets");
        self.reveal.reset();
        self.state.gui.explorer.selected = None;
        self.data.load_all(ctx, &self.state.options.source, self.state.gui.explorer.schema);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.add_space(4.0);
            super::components::tabs::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            super::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            egui::ScrollArea::vertical()
                .id_salt(("page", page.title()))
                .auto_shrink([false, false])
                .show(ui, |ui| page.draw(ui, self));
        });
    }
}
