// src/lib.rs
//! Core of the AI job-outlook explorer: a forgiving CSV parser, typed
//! record transformers, an async loader that never fails loudly, and
//! pure chart-geometry engines. The desktop viewer (`gui`) and the CLI
//! (`cli`, feature `cli`) sit on top.

#[macro_use]
pub mod macros;

pub mod config;
pub mod csv;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod records;
pub mod search;
pub mod showcase;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use loader::{Fetch, FileFetch, HttpFetch, Loader, Source};
