// src/records/skills.rs
use serde::{Deserialize, Serialize};

use super::int_value;
use crate::csv::RawRecord;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillValue {
    pub name: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategoryRecord {
    pub category: String,
    pub skills: Vec<SkillValue>,
}

/// Group `category, skill_name, value` rows by category.
/// Categories come out in order of first appearance; skills keep row order.
pub fn transform_skills_data(rows: &[RawRecord]) -> Vec<SkillCategoryRecord> {
    let mut out: Vec<SkillCategoryRecord> = Vec::new();

    for r in rows {
        let category = r.field("category");
        let skill = SkillValue {
            name: s!(r.field("skill_name")),
            value: int_value(r.field("value")),
        };

        match out.iter_mut().find(|c| c.category == category) {
            Some(group) => group.skills.push(skill),
            None => out.push(SkillCategoryRecord {
                category: s!(category),
                skills: vec![skill],
            }),
        }
    }

    out
}
