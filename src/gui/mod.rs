// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod load;
pub mod pages;
pub mod reveal;
pub mod router;

pub use app::run;
