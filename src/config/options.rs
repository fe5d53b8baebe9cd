// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: DataSource,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self { source: DataSource::default() }
    }
}

impl AppOptions {
    /// Source from an explicit argument, else `JOB_OUTLOOK_SOURCE`, else `./data`.
    pub fn from_arg_or_env(arg: Option<&str>) -> Self {
        let source = arg
            .map(DataSource::parse)
            .or_else(|| std::env::var(SOURCE_ENV).ok().map(|v| DataSource::parse(&v)))
            .unwrap_or_default();
        Self { source }
    }
}

/// Viewer tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Explorer,
    Domains,
    Skills,
    Trends,
}

/// Where CSV resources are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Local directory standing in for the site's `/data/` folder.
    Dir(PathBuf),
    /// Site base URL; resource paths are appended as-is.
    Url(String),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Dir(PathBuf::from(DEFAULT_DATA_DIR))
    }
}

impl DataSource {
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        if t.starts_with("http://") || t.starts_with("https://") {
            DataSource::Url(t.trim_end_matches('/').to_string())
        } else {
            DataSource::Dir(PathBuf::from(t))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Dir(p) => p.display().to_string(),
            DataSource::Url(u) => u.clone(),
        }
    }
}

/// Map `/data/job_data.csv` onto `<root>/job_data.csv`.
pub fn resolve_in_dir(root: &Path, resource: &str) -> PathBuf {
    let rel = resource
        .strip_prefix(DATA_PREFIX)
        .unwrap_or_else(|| resource.trim_start_matches('/'));
    root.join(rel)
}
