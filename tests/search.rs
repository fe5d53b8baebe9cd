// tests/search.rs
use job_outlook::records::{JobRecord, RiskTier};
use job_outlook::search::{Direction, JobQuery, SortKey, domains, tier_counts};

fn job(title: &str, impact: f64, ratio: f64, domain: &str) -> JobRecord {
    JobRecord {
        title: title.into(),
        impact,
        ai_workload_ratio: ratio,
        domain: domain.into(),
        ..Default::default()
    }
}

fn sample() -> Vec<JobRecord> {
    vec![
        job("Data Entry Clerk", 95.0, 0.92, "Administrative"),
        job("Registered Nurse", 22.0, 0.18, "Healthcare"),
        job("Paralegal", 71.0, f64::NAN, "Legal"),
        job("Psychotherapist", 10.0, 0.07, "Healthcare"),
        job("Graphic Designer", 58.0, 0.52, "Creative Arts"),
    ]
}

fn titles(hits: &[&JobRecord]) -> Vec<String> {
    hits.iter().map(|j| j.title.clone()).collect()
}

#[test]
fn default_query_sorts_by_impact_descending() {
    let jobs = sample();
    let hits = JobQuery::default().apply(&jobs);
    assert_eq!(
        titles(&hits),
        vec!["Data Entry Clerk", "Paralegal", "Graphic Designer", "Registered Nurse", "Psychotherapist"]
    );
}

#[test]
fn term_is_case_insensitive_substring() {
    let jobs = sample();
    let q = JobQuery { term: "  NURSE ".into(), ..Default::default() };
    assert_eq!(titles(&q.apply(&jobs)), vec!["Registered Nurse"]);
}

#[test]
fn domain_and_tier_filters_combine() {
    let jobs = sample();
    let q = JobQuery {
        domain: Some("Healthcare".into()),
        tier: Some(RiskTier::Low),
        direction: Direction::Ascending,
        ..Default::default()
    };
    assert_eq!(titles(&q.apply(&jobs)), vec!["Psychotherapist", "Registered Nurse"]);

    let high = JobQuery { tier: Some(RiskTier::High), ..Default::default() };
    assert_eq!(titles(&high.apply(&jobs)), vec!["Data Entry Clerk", "Paralegal"]);
}

#[test]
fn nan_ratio_sorts_last_both_ways() {
    let jobs = sample();
    for direction in [Direction::Ascending, Direction::Descending] {
        let q = JobQuery { sort: SortKey::WorkloadRatio, direction, ..Default::default() };
        let hits = q.apply(&jobs);
        assert_eq!(hits.last().map(|j| j.title.as_str()), Some("Paralegal"));
    }
}

#[test]
fn title_sort_ignores_case() {
    let mut jobs = sample();
    jobs.push(job("actuary", 60.0, 0.5, "Finance"));
    let q = JobQuery { sort: SortKey::Title, direction: Direction::Ascending, ..Default::default() };
    assert_eq!(titles(&q.apply(&jobs))[0], "actuary");
    assert_eq!(Direction::Ascending.flip(), Direction::Descending);
}

#[test]
fn domain_list_and_tier_counts() {
    let jobs = sample();
    assert_eq!(domains(&jobs), vec!["Administrative", "Healthcare", "Legal", "Creative Arts"]);
    assert_eq!(
        tier_counts(&jobs),
        [(RiskTier::Low, 2), (RiskTier::Medium, 1), (RiskTier::High, 2)]
    );
}
