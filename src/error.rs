// src/error.rs
//! Error type for the fetch layer.
//!
//! Only the fetch/parse plumbing returns these. The public loaders in
//! `crate::loader` log them and hand back an empty `Vec` instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request for {path} failed: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {path}: HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} parsed to zero records")]
    Empty { path: String },

    #[error("async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
