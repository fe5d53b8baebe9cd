// src/records/timeline.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::parse_int;
use crate::csv::RawRecord;

/// Numeric year, or the raw label when it is not one (e.g. "Late 2020s").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimelineYear {
    Year(i64),
    Label(String),
}

impl TimelineYear {
    pub fn parse(text: &str) -> Self {
        match parse_int(text) {
            Some(y) => TimelineYear::Year(y),
            None => TimelineYear::Label(s!(text)),
        }
    }
}

impl fmt::Display for TimelineYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineYear::Year(y) => write!(f, "{y}"),
            TimelineYear::Label(l) => f.write_str(l),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEventRecord {
    pub year: TimelineYear,
    pub title: String,
    pub description: String,
    pub icon_color: Option<String>,
    pub icon: Option<String>,
}

pub fn transform_timeline_events(rows: &[RawRecord]) -> Vec<TimelineEventRecord> {
    let opt = |s: &str| if s.is_empty() { None } else { Some(s!(s)) };
    rows.iter()
        .map(|r| TimelineEventRecord {
            year: TimelineYear::parse(r.field("year")),
            title: s!(r.field("title")),
            description: s!(r.field("description")),
            icon_color: opt(r.field("iconColor")),
            icon: opt(r.field("icon")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_keeps_label_when_not_numeric() {
        assert_eq!(TimelineYear::parse("2027"), TimelineYear::Year(2027));
        assert_eq!(TimelineYear::parse("Late 2020s"), TimelineYear::Label("Late 2020s".into()));
        assert_eq!(TimelineYear::parse("2030s").to_string(), "2030");
    }
}
