// src/search.rs
use serde::Serialize;

use crate::records::{JobRecord, RiskTier};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Impact,
    Title,
    WorkloadRatio,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Impact, SortKey::Title, SortKey::WorkloadRatio];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Impact => "AI impact",
            SortKey::Title => "Title",
            SortKey::WorkloadRatio => "AI workload ratio",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    #[default]
    Descending,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Filter + sort over loaded jobs. Empty/`None` fields match everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobQuery {
    /// Case-insensitive substring of the title.
    pub term: String,
    /// Exact domain name.
    pub domain: Option<String>,
    pub tier: Option<RiskTier>,
    pub sort: SortKey,
    pub direction: Direction,
}

impl JobQuery {
    pub fn matches(&self, job: &JobRecord) -> bool {
        let term = self.term.trim().to_lowercase();
        (term.is_empty() || job.title.to_lowercase().contains(&term))
            && self.domain.as_ref().is_none_or(|d| &job.domain == d)
            && self.tier.is_none_or(|t| t.contains(job.impact))
    }

    /// Matching jobs, stably sorted. NaN numbers sort last either way.
    pub fn apply<'a>(&self, jobs: &'a [JobRecord]) -> Vec<&'a JobRecord> {
        let mut hits: Vec<&JobRecord> = jobs.iter().filter(|j| self.matches(j)).collect();

        let dir = self.direction;
        let by_num = |a: f64, b: f64| match (a.is_nan(), b.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            _ => match dir {
                Direction::Ascending => a.total_cmp(&b),
                Direction::Descending => b.total_cmp(&a),
            },
        };

        match self.sort {
            SortKey::Impact => hits.sort_by(|a, b| by_num(a.impact, b.impact)),
            SortKey::WorkloadRatio => hits.sort_by(|a, b| by_num(a.ai_workload_ratio, b.ai_workload_ratio)),
            SortKey::Title => hits.sort_by(|a, b| {
                let o = a.title.to_lowercase().cmp(&b.title.to_lowercase());
                if dir == Direction::Descending { o.reverse() } else { o }
            }),
        }
        hits
    }
}

/// Distinct domains in first-seen order, blanks skipped.
pub fn domains(jobs: &[JobRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for j in jobs {
        if !j.domain.is_empty() && !out.contains(&j.domain) {
            out.push(j.domain.clone());
        }
    }
    out
}

/// Count per tier, in `RiskTier::ALL` order; jobs without a tier are left out.
pub fn tier_counts(jobs: &[JobRecord]) -> [(RiskTier, usize); 3] {
    RiskTier::ALL.map(|t| (t, jobs.iter().filter(|j| t.contains(j.impact)).count()))
}
