// src/gui/pages/explorer.rs
use eframe::egui::{self, RichText};
use log::{debug, info};

use crate::config::options::PageKind;
use crate::geometry::{GaugeConfig, RadarConfig, RadarData, format_value, gauge, radar};
use crate::gui::app::App;
use crate::gui::components::{charts, job_table, load_status::{Gate, gate}};
use crate::records::{JobRecord, JobSchema, RiskTier};
use crate::search::{Direction, SortKey, domains, tier_counts};

use super::{Page, reveal};

pub struct ExplorerPage;
pub static PAGE: ExplorerPage = ExplorerPage;

impl Page for ExplorerPage {
    fn title(&self) -> &'static str { "Job Explorer" }
    fn kind(&self) -> PageKind { PageKind::Explorer }
    fn subtitle(&self) -> &'static str {
        "Search a role to see its automation risk, the skills worth keeping and how human and AI strengths compare."
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        schema_picker(ui, app);

        let jobs = match gate(ui, &app.data.jobs, "job data", false) {
            Gate::Ready(v) => v,
            Gate::Retry => {
                app.reload_jobs(ui.ctx());
                return;
            }
            Gate::Fallback | Gate::Wait => return,
        };

        filters(ui, app, &jobs);
        ui.add_space(6.0);

        let ex = &app.state.gui.explorer;
        let hits = ex.query.apply(&jobs);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{} of {} jobs", hits.len(), jobs.len())).weak());
            for (tier, n) in tier_counts(&jobs) {
                ui.label(RichText::new(format!("{}: {}", tier.label(), n)).color(charts::hex(tier.color())));
            }
        });

        if let Some(title) = job_table::draw(ui, &hits, ex.selected.as_deref()) {
            info!("UI: Select job {:?}", title);
            app.state.gui.explorer.selected = Some(title);
            app.reveal.restart("explorer_gauge");
            app.reveal.restart("explorer_radar");
        }

        ui.separator();

        let selected = app.state.gui.explorer.selected.clone();
        match selected.and_then(|t| jobs.iter().find(|j| j.title == t)) {
            Some(job) => details(ui, app, job),
            None => {
                ui.label(RichText::new("Select a job above to see its breakdown.").weak());
            }
        }
    }
}

fn schema_picker(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Dataset:");
        let cur = app.state.gui.explorer.schema;
        let mut next = cur;
        ui.radio_value(&mut next, JobSchema::JobData, "Job overview");
        ui.radio_value(&mut next, JobSchema::Augmented, "Detailed assessments");
        if next != cur {
            info!("UI: Job schema {} → {}", cur.name(), next.name());
            app.state.gui.explorer.schema = next;
            app.reload_jobs(ui.ctx());
        }
    });
}

fn filters(ui: &mut egui::Ui, app: &mut App, jobs: &[JobRecord]) {
    let q = &mut app.state.gui.explorer.query;
    let all_domains = domains(jobs);

    ui.horizontal_wrapped(|ui| {
        ui.add(egui::TextEdit::singleline(&mut q.term).hint_text("Search job titles…").desired_width(220.0));

        egui::ComboBox::from_id_salt("domain_filter")
            .selected_text(q.domain.clone().unwrap_or_else(|| s!("All domains")))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut q.domain, None, "All domains");
                for d in &all_domains {
                    ui.selectable_value(&mut q.domain, Some(d.clone()), d);
                }
            });

        egui::ComboBox::from_id_salt("tier_filter")
            .selected_text(q.tier.map(RiskTier::label).unwrap_or("Any risk"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut q.tier, None, "Any risk");
                for t in RiskTier::ALL {
                    ui.selectable_value(&mut q.tier, Some(t), t.label());
                }
            });

        egui::ComboBox::from_id_salt("sort_key")
            .selected_text(format!("Sort: {}", q.sort.label()))
            .show_ui(ui, |ui| {
                for k in SortKey::ALL {
                    ui.selectable_value(&mut q.sort, k, k.label());
                }
            });

        let arrow = match q.direction {
            Direction::Ascending => "⬆ Asc",
            Direction::Descending => "⬇ Desc",
        };
        if ui.button(arrow).clicked() {
            q.direction = q.direction.flip();
            debug!("UI: Sort direction {:?}", q.direction);
        }

        if ui.button("Clear").clicked() {
            *q = Default::default();
        }
    });
}

fn details(ui: &mut egui::Ui, app: &mut App, job: &JobRecord) {
    ui.heading(&job.title);
    if !job.domain.is_empty() {
        ui.label(RichText::new(&job.domain).weak());
    }
    ui.add_space(6.0);

    let g = gauge(job.impact, &GaugeConfig::default());
    let rcfg = RadarConfig::default();
    let r = radar(&RadarData::for_job(job.impact), &rcfg);

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.strong("AI impact");
            let t = reveal(ui, app, "explorer_gauge", egui::Vec2::splat(g.size as f32));
            charts::gauge(ui, &g, t);
            if let Some(tier) = job.risk_tier() {
                ui.add(egui::Label::new(tier.explanation()).wrap());
            }

            facts(ui, job);
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.strong("Human vs AI Skills Comparison");
            let t = reveal(ui, app, "explorer_radar", egui::Vec2::splat(r.size as f32));
            charts::radar(ui, &r, t);
        });
    });

    if !job.key_skills_to_keep.is_empty() {
        ui.add_space(6.0);
        ui.strong("Key skills to keep");
        ui.horizontal_wrapped(|ui| {
            for skill in &job.key_skills_to_keep {
                ui.label(RichText::new(skill).background_color(ui.visuals().faint_bg_color));
            }
        });
    }
    for (heading, text) in [("How to be AI-proof", &job.how_to_be_ai_proof), ("Assessment", &job.ai_impact_assessment)] {
        if !text.is_empty() {
            ui.add_space(6.0);
            ui.strong(heading);
            ui.label(text);
        }
    }
}

fn facts(ui: &mut egui::Ui, job: &JobRecord) {
    let count = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_else(|| s!("n/a"));
    let level = |l: Option<crate::records::Level>| l.map(|l| format!("{l:?}")).unwrap_or_else(|| s!("n/a"));

    egui::Grid::new("job_facts").num_columns(2).spacing([12.0, 4.0]).show(ui, |ui| {
        ui.label("Tasks");
        ui.label(count(job.tasks));
        ui.end_row();
        ui.label("AI models");
        ui.label(count(job.ai_models));
        ui.end_row();
        ui.label("AI workload ratio");
        ui.label(if job.ai_workload_ratio.is_finite() {
            format!("{}%", format_value((job.ai_workload_ratio * 1000.0).round() / 10.0))
        } else {
            s!("n/a")
        });
        ui.end_row();
        if !job.time_to_disruption.is_empty() {
            ui.label("Time to disruption");
            ui.label(&job.time_to_disruption);
            ui.end_row();
        }
        if job.automation_level.is_some() || job.augmentation_potential.is_some() {
            ui.label("Automation level");
            ui.label(level(job.automation_level));
            ui.end_row();
            ui.label("Augmentation potential");
            ui.label(level(job.augmentation_potential));
            ui.end_row();
        }
    });
}
