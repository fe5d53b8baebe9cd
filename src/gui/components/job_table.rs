// src/gui/components/job_table.rs
//
// Results table for the explorer. Purely a view: returns the title of a
// row clicked this frame, the caller owns the selection.

use eframe::egui::{self, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::geometry::format_value;
use crate::gui::components::charts::hex;
use crate::records::JobRecord;

const HEADERS: [&str; 5] = ["Title", "Domain", "AI impact", "Risk", "Time to disruption"];

pub fn draw(ui: &mut egui::Ui, jobs: &[&JobRecord], selected: Option<&str>) -> Option<String> {
    let mut clicked = None;

    let table = TableBuilder::new(ui)
        .id_salt("job_table")
        .striped(true)
        .sense(Sense::click())
        .max_scroll_height(320.0)
        .column(Column::initial(220.0).at_least(120.0).resizable(true).clip(true))
        .column(Column::initial(140.0).resizable(true).clip(true))
        .column(Column::exact(70.0))
        .column(Column::exact(90.0))
        .column(Column::remainder().clip(true));

    table
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, jobs.len(), |mut row| {
                let job = jobs[row.index()];
                row.set_selected(selected == Some(job.title.as_str()));

                row.col(|ui| {
                    ui.label(&job.title);
                });
                row.col(|ui| {
                    ui.label(&job.domain);
                });
                row.col(|ui| {
                    ui.label(format!("{}%", format_value(job.impact)));
                });
                row.col(|ui| match job.risk_tier() {
                    Some(tier) => {
                        ui.label(RichText::new(tier.level_name()).color(hex(tier.color())));
                    }
                    None => {
                        ui.weak("n/a");
                    }
                });
                row.col(|ui| {
                    ui.label(&job.time_to_disruption);
                });

                if row.response().clicked() {
                    clicked = Some(job.title.clone());
                }
            });
        });

    clicked
}
