// tests/transforms.rs
//
// Record transformers over parsed rows.
//
use job_outlook::csv::{ParseOptions, RawRecord, parse_csv};
use job_outlook::records::{
    JobSchema, Level, TimelineYear,
    sectors::transform_sector_data,
    skills::transform_skills_data,
    timeline::transform_timeline_events,
};

fn row(pairs: &[(&str, &str)]) -> RawRecord {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

#[test]
fn skills_group_in_first_seen_order() {
    let rows = vec![
        row(&[("category", "A"), ("skill_name", "x"), ("value", "1")]),
        row(&[("category", "B"), ("skill_name", "y"), ("value", "2")]),
        row(&[("category", "A"), ("skill_name", "z"), ("value", "3")]),
    ];
    let groups = transform_skills_data(&rows);

    let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let a: Vec<(&str, f64)> = groups[0].skills.iter().map(|s| (s.name.as_str(), s.value)).collect();
    assert_eq!(a, vec![("x", 1.0), ("z", 3.0)]);
}

#[test]
fn skills_bad_value_is_nan() {
    let groups = transform_skills_data(&[row(&[("category", "A"), ("skill_name", "x"), ("value", "high")])]);
    assert!(groups[0].skills[0].value.is_nan());
}

#[test]
fn job_data_schema() {
    let text = "title,impact,tasks,aiModels,aiWorkloadRatio,domain,keySkillsToKeep,timeToDisruption,automationLevel,augmentationPotential\n\
                Clerk,85%,210,n/a,0.92,Admin,Accuracy| Judgment ||,1-2 years,High,low\n";
    let rows = parse_csv(text, &ParseOptions::resource());
    let jobs = JobSchema::JobData.transform(&rows);
    let j = &jobs[0];

    assert_eq!(j.title, "Clerk");
    assert_eq!(j.impact, 85.0);
    assert_eq!(j.tasks, Some(210));
    assert_eq!(j.ai_models, None);
    assert_eq!(j.ai_workload_ratio, 0.92);
    assert_eq!(j.key_skills_to_keep, vec!["Accuracy", "Judgment"]);
    assert_eq!(j.time_to_disruption, "1-2 years");
    assert_eq!(j.automation_level, Some(Level::High));
    assert_eq!(j.augmentation_potential, Some(Level::Low));
    assert!(j.how_to_be_ai_proof.is_empty());
}

#[test]
fn augmented_schema_uses_spaced_headers_and_comma_skills() {
    let text = "Job Titles,AI Impact,Tasks,AI models,AI_Workload_Ratio,Domain,Key Skills to Maintain,How to Be AI-Proof,Time to Disruption,AI Impact Assessment\n\
                Copywriter,74%,160,2350,0.69,Marketing,\"Brand voice, Strategy\",Own the narrative,2-3 years,Drafting is commoditized\n";
    let rows = parse_csv(text, &ParseOptions::resource());
    let jobs = JobSchema::Augmented.transform(&rows);
    let j = &jobs[0];

    assert_eq!(j.title, "Copywriter");
    assert_eq!(j.impact, 74.0);
    assert_eq!(j.ai_models, Some(2350));
    assert_eq!(j.domain, "Marketing");
    assert_eq!(j.key_skills_to_keep, vec!["Brand voice", "Strategy"]);
    assert_eq!(j.how_to_be_ai_proof, "Own the narrative");
    assert_eq!(j.ai_impact_assessment, "Drafting is commoditized");
    assert_eq!(j.automation_level, None);
}

#[test]
fn schemas_are_not_interchangeable() {
    // job_data headers read through the augmented schema find nothing.
    let rows = vec![row(&[("title", "Nurse"), ("impact", "15")])];
    let j = &JobSchema::Augmented.transform(&rows)[0];
    assert!(j.title.is_empty());
    assert!(j.impact.is_nan());
    assert!(!j.has_valid_impact());
}

#[test]
fn sectors_keep_optional_fields() {
    let rows = vec![
        row(&[("label", "Finance"), ("value", "87"), ("color", "#F87171"), ("description", "")]),
        row(&[("label", "Retail"), ("value", "x"), ("color", ""), ("description", "Up to 80%")]),
    ];
    let s = transform_sector_data(&rows);
    assert_eq!(s[0].value, 87.0);
    assert_eq!(s[0].color.as_deref(), Some("#F87171"));
    assert_eq!(s[0].description, None);
    assert!(s[1].value.is_nan());
    assert_eq!(s[1].color, None);
    assert_eq!(s[1].description.as_deref(), Some("Up to 80%"));
}

#[test]
fn timeline_year_number_or_label() {
    let rows = vec![
        row(&[("year", "2025"), ("title", "Routine"), ("description", "d"), ("iconColor", "#F87171"), ("icon", "")]),
        row(&[("year", "Late 2020s"), ("title", "Later"), ("description", ""), ("iconColor", ""), ("icon", "x")]),
    ];
    let ev = transform_timeline_events(&rows);
    assert_eq!(ev[0].year, TimelineYear::Year(2025));
    assert_eq!(ev[0].icon, None);
    assert_eq!(ev[1].year, TimelineYear::Label("Late 2020s".into()));
    assert_eq!(ev[1].icon_color, None);
    assert_eq!(ev[1].year.to_string(), "Late 2020s");
}
