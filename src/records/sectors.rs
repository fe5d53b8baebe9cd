// src/records/sectors.rs
use serde::{Deserialize, Serialize};

use super::int_value;
use crate::csv::RawRecord;

/// One bar of the sector chart. `value` is a percentage (0..=100).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectorRecord {
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl SectorRecord {
    pub fn new(label: &str, value: f64, color: &str, description: &str) -> Self {
        Self {
            label: s!(label),
            value,
            color: non_empty(color),
            description: non_empty(description),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s!(s)) }
}

pub fn transform_sector_data(rows: &[RawRecord]) -> Vec<SectorRecord> {
    rows.iter()
        .map(|r| SectorRecord {
            label: s!(r.field("label")),
            value: int_value(r.field("value")),
            color: non_empty(r.field("color")),
            description: non_empty(r.field("description")),
        })
        .collect()
}
