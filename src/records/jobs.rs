// src/records/jobs.rs
use serde::{Deserialize, Serialize};

use super::{RiskTier, float_value, int_value, parse_int, split_list};
use crate::csv::RawRecord;

/// Low/Medium/High labels used by `job_data.csv`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn parse(text: &str) -> Option<Level> {
        match text.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub title: String,
    /// 0..=100; `NaN` when the source cell was not numeric.
    pub impact: f64,
    pub tasks: Option<i64>,
    pub ai_models: Option<i64>,
    /// 0..=1; `NaN` when the source cell was not numeric.
    pub ai_workload_ratio: f64,
    pub domain: String,
    pub key_skills_to_keep: Vec<String>,
    pub how_to_be_ai_proof: String,
    pub time_to_disruption: String,
    pub ai_impact_assessment: String,
    pub automation_level: Option<Level>,
    pub augmentation_potential: Option<Level>,
}

impl JobRecord {
    pub fn risk_tier(&self) -> Option<RiskTier> {
        RiskTier::try_classify(self.impact)
    }

    /// Impact is a finite score inside 0..=100.
    pub fn has_valid_impact(&self) -> bool {
        self.impact.is_finite() && (0.0..=100.0).contains(&self.impact)
    }
}

/// The two job CSV contracts. Not interchangeable: different headers and
/// different skill separators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobSchema {
    /// `job_data.csv`: camelCase headers, skills split on `"|"`.
    JobData,
    /// `augmented_final_data.csv`: spaced headers, skills split on `", "`.
    Augmented,
}

struct Columns {
    title: &'static str,
    impact: &'static str,
    tasks: &'static str,
    ai_models: &'static str,
    ratio: &'static str,
    domain: &'static str,
    skills: &'static str,
    skills_sep: &'static str,
    time_to_disruption: &'static str,
    how_to_be_ai_proof: Option<&'static str>,
    assessment: Option<&'static str>,
    automation_level: Option<&'static str>,
    augmentation_potential: Option<&'static str>,
}

const JOB_DATA: Columns = Columns {
    title: "title",
    impact: "impact",
    tasks: "tasks",
    ai_models: "aiModels",
    ratio: "aiWorkloadRatio",
    domain: "domain",
    skills: "keySkillsToKeep",
    skills_sep: "|",
    time_to_disruption: "timeToDisruption",
    how_to_be_ai_proof: None,
    assessment: None,
    automation_level: Some("automationLevel"),
    augmentation_potential: Some("augmentationPotential"),
};

const AUGMENTED: Columns = Columns {
    title: "Job Titles",
    impact: "AI Impact",
    tasks: "Tasks",
    ai_models: "AI models",
    ratio: "AI_Workload_Ratio",
    domain: "Domain",
    skills: "Key Skills to Maintain",
    skills_sep: ", ",
    time_to_disruption: "Time to Disruption",
    how_to_be_ai_proof: Some("How to Be AI-Proof"),
    assessment: Some("AI Impact Assessment"),
    automation_level: None,
    augmentation_potential: None,
};

impl JobSchema {
    fn columns(self) -> &'static Columns {
        match self {
            JobSchema::JobData => &JOB_DATA,
            JobSchema::Augmented => &AUGMENTED,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            JobSchema::JobData => "job_data",
            JobSchema::Augmented => "augmented_final_data",
        }
    }

    pub fn transform_one(self, raw: &RawRecord) -> JobRecord {
        let c = self.columns();
        let opt = |key: Option<&str>| key.map(|k| raw.field(k).to_string()).unwrap_or_default();
        let level = |key: Option<&str>| key.and_then(|k| Level::parse(raw.field(k)));

        JobRecord {
            title: raw.field(c.title).to_string(),
            impact: int_value(raw.field(c.impact)),
            tasks: parse_int(raw.field(c.tasks)),
            ai_models: parse_int(raw.field(c.ai_models)),
            ai_workload_ratio: float_value(raw.field(c.ratio)),
            domain: raw.field(c.domain).to_string(),
            key_skills_to_keep: split_list(raw.field(c.skills), c.skills_sep),
            how_to_be_ai_proof: opt(c.how_to_be_ai_proof),
            time_to_disruption: raw.field(c.time_to_disruption).to_string(),
            ai_impact_assessment: opt(c.assessment),
            automation_level: level(c.automation_level),
            augmentation_potential: level(c.augmentation_potential),
        }
    }

    pub fn transform(self, rows: &[RawRecord]) -> Vec<JobRecord> {
        rows.iter().map(|r| self.transform_one(r)).collect()
    }
}

/// `job_data.csv` rows → jobs.
pub fn transform_job_data(rows: &[RawRecord]) -> Vec<JobRecord> {
    JobSchema::JobData.transform(rows)
}

/// `augmented_final_data.csv` rows → jobs.
pub fn transform_augmented_job_data(rows: &[RawRecord]) -> Vec<JobRecord> {
    JobSchema::Augmented.transform(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs.iter().copied().collect()
    }

    #[test]
    fn job_data_splits_on_pipe() {
        let r = raw(&[
            ("title", "Nurse"),
            ("impact", "15"),
            ("tasks", "40"),
            ("aiModels", "3"),
            ("aiWorkloadRatio", "0.075"),
            ("domain", "Healthcare"),
            ("automationLevel", "Low"),
            ("augmentationPotential", "High"),
            ("timeToDisruption", "10+ years"),
            ("keySkillsToKeep", "Empathy|Judgment, care|Triage"),
        ]);
        let job = JobSchema::JobData.transform_one(&r);
        assert_eq!(job.impact, 15.0);
        assert_eq!(job.tasks, Some(40));
        assert_eq!(job.key_skills_to_keep, vec!["Empathy", "Judgment, care", "Triage"]);
        assert_eq!(job.automation_level, Some(Level::Low));
        assert_eq!(job.augmentation_potential, Some(Level::High));
        assert_eq!(job.risk_tier(), Some(RiskTier::Low));
    }

    #[test]
    fn augmented_splits_on_comma_space() {
        let r = raw(&[
            ("Job Titles", "Data Entry Clerk"),
            ("AI Impact", "95%"),
            ("Tasks", "12"),
            ("AI models", "n/a"),
            ("AI_Workload_Ratio", "0.9"),
            ("Domain", "Administrative"),
            ("Key Skills to Maintain", "Accuracy, Judgment|Context"),
            ("How to Be AI-Proof", "Move into QA"),
            ("Time to Disruption", "1-2 years"),
            ("AI Impact Assessment", "Severe"),
        ]);
        let job = JobSchema::Augmented.transform_one(&r);
        assert_eq!(job.impact, 95.0);
        assert_eq!(job.ai_models, None);
        assert_eq!(job.key_skills_to_keep, vec!["Accuracy", "Judgment|Context"]);
        assert_eq!(job.how_to_be_ai_proof, "Move into QA");
        assert_eq!(job.automation_level, None);
    }

    #[test]
    fn non_numeric_impact_is_nan_not_error() {
        let r = raw(&[("title", "Mystery"), ("impact", "unknown")]);
        let job = JobSchema::JobData.transform_one(&r);
        assert!(job.impact.is_nan());
        assert!(!job.has_valid_impact());
        assert_eq!(job.risk_tier(), None);
        assert!(job.key_skills_to_keep.is_empty());
    }
}
