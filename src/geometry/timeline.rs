// src/geometry/timeline.rs
use serde::Serialize;

use crate::config::consts::ACCENT_COLOR;
use crate::records::TimelineEventRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Side {
        if index % 2 == 0 { Side::Left } else { Side::Right }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub index: usize,
    pub side: Side,
    pub year: String,
    pub title: String,
    pub description: String,
    pub marker_color: String,
    pub icon: Option<String>,
}

/// Events laid out down a central spine, alternating sides.
pub fn timeline(events: &[TimelineEventRecord]) -> Vec<TimelineEntry> {
    events
        .iter()
        .enumerate()
        .map(|(index, e)| TimelineEntry {
            index,
            side: Side::for_index(index),
            year: e.year.to_string(),
            title: e.title.clone(),
            description: e.description.clone(),
            marker_color: e.icon_color.clone().unwrap_or_else(|| s!(ACCENT_COLOR)),
            icon: e.icon.clone(),
        })
        .collect()
}
