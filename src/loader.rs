// src/loader.rs
//! Data loader: fetch a CSV resource, parse it, transform it.
//!
//! Failures never cross this boundary. Network errors, bad statuses,
//! unreadable files and empty parses are logged and come back as an
//! empty `Vec`; callers treat "empty" as "load failed". Every call fetches
//! again: no de-duplication and no cancellation.

use std::future::Future;
use std::path::PathBuf;

use log::{error, info, warn};

use crate::config::consts::*;
use crate::config::options::{DataSource, resolve_in_dir};
use crate::csv::{ParseOptions, RawRecord, parse_csv};
use crate::error::{Error, Result};
use crate::records::{
    JobRecord, JobSchema, SectorRecord, SkillCategoryRecord, TimelineEventRecord,
    sectors::transform_sector_data, skills::transform_skills_data,
    timeline::transform_timeline_events,
};

/// Retrieve the text of a resource such as `/data/job_data.csv`.
pub trait Fetch {
    fn fetch_text(&self, path: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Plain HTTP GET against a site base URL.
#[derive(Clone, Debug)]
pub struct HttpFetch {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetch {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Fetch for HttpFetch {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        let http = |source| Error::Http { path: s!(path), source };

        let resp = self.client.get(&url).send().await.map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { path: s!(path), status: status.as_u16() });
        }
        resp.text().await.map_err(http)
    }
}

/// Reads resources from a local directory standing in for `/data/`.
#[derive(Clone, Debug)]
pub struct FileFetch {
    root: PathBuf,
}

impl FileFetch {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetch for FileFetch {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let file = resolve_in_dir(&self.root, path);
        tokio::fs::read_to_string(&file)
            .await
            .map_err(|source| Error::Io { path: file.display().to_string(), source })
    }
}

/// Either fetcher, picked at runtime from a `DataSource`.
#[derive(Clone, Debug)]
pub enum Source {
    Http(HttpFetch),
    File(FileFetch),
}

impl From<&DataSource> for Source {
    fn from(ds: &DataSource) -> Self {
        match ds {
            DataSource::Dir(root) => Source::File(FileFetch::new(root.clone())),
            DataSource::Url(base) => Source::Http(HttpFetch::new(base.clone())),
        }
    }
}

impl Fetch for Source {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        match self {
            Source::Http(f) => f.fetch_text(path).await,
            Source::File(f) => f.fetch_text(path).await,
        }
    }
}

pub struct Loader<F: Fetch> {
    fetch: F,
    parse: ParseOptions,
}

impl Loader<Source> {
    pub fn from_source(ds: &DataSource) -> Self {
        Self::new(Source::from(ds))
    }
}

impl<F: Fetch> Loader<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch, parse: ParseOptions::resource() }
    }

    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Fetch + parse, surfacing the failure cause.
    pub async fn try_fetch_csv(&self, path: &str) -> Result<Vec<RawRecord>> {
        let text = self.fetch.fetch_text(path).await?;
        let rows = parse_csv(&text, &self.parse);
        if rows.is_empty() {
            return Err(Error::Empty { path: s!(path) });
        }
        Ok(rows)
    }

    /// Fetch + parse; any failure is logged and reads as no rows.
    pub async fn fetch_csv(&self, path: &str) -> Vec<RawRecord> {
        match self.try_fetch_csv(path).await {
            Ok(rows) => {
                info!("Load: {} ok ({} rows)", path, rows.len());
                rows
            }
            Err(e) => {
                error!("Load: error fetching CSV from {}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// Any job schema; rows whose impact is not a score in 0..=100 are dropped.
    pub async fn load_job_schema(&self, schema: JobSchema, path: &str) -> Vec<JobRecord> {
        let rows = self.fetch_csv(path).await;
        let mut jobs = schema.transform(&rows);
        jobs.retain(|job| {
            let ok = job.has_valid_impact();
            if !ok {
                warn!("Load: {} dropping {:?}: impact is not a 0-100 score", schema.name(), job.title);
            }
            ok
        });
        jobs
    }

    pub async fn load_jobs(&self) -> Vec<JobRecord> {
        self.load_job_schema(JobSchema::JobData, JOB_DATA_PATH).await
    }

    pub async fn load_augmented_jobs(&self) -> Vec<JobRecord> {
        self.load_job_schema(JobSchema::Augmented, AUGMENTED_JOB_DATA_PATH).await
    }

    pub async fn load_sectors(&self) -> Vec<SectorRecord> {
        transform_sector_data(&self.fetch_csv(SECTOR_DATA_PATH).await)
    }

    pub async fn load_skills(&self) -> Vec<SkillCategoryRecord> {
        transform_skills_data(&self.fetch_csv(SKILLS_DATA_PATH).await)
    }

    pub async fn load_timeline(&self) -> Vec<TimelineEventRecord> {
        transform_timeline_events(&self.fetch_csv(TIMELINE_EVENTS_PATH).await)
    }
}

/// Drive one load to completion on a fresh single-threaded runtime.
/// For callers (viewer worker threads, the CLI) that are not async themselves.
pub fn block_on<T>(fut: impl Future<Output = T>) -> Result<T> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(fut))
}
