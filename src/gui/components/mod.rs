// src/gui/components/mod.rs
pub mod charts;
pub mod job_table;
pub mod load_status;
pub mod status_bar;
pub mod tabs;
