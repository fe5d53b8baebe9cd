// tests/csv_parse.rs
//
// Parser contract: row counts, quoting, blank lines, line endings.
//
use job_outlook::csv::{ParseOptions, RawRecord, parse_csv};
use job_outlook::records::jobs::transform_job_data;
use job_outlook::records::RiskTier;

fn parse(text: &str) -> Vec<RawRecord> {
    parse_csv(text, &ParseOptions::resource())
}

#[test]
fn one_record_per_data_line_with_header_keys() {
    let text = "title,impact,domain\nA,1,X\nB,2,Y\nC,3,Z\n";
    let rows = parse(text);
    assert_eq!(rows.len(), 3);
    for r in &rows {
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["title", "impact", "domain"]);
    }
}

#[test]
fn short_rows_fill_missing_columns_with_empty() {
    let rows = parse("a,b,c\n1\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("a"), Some("1"));
    assert_eq!(rows[0].get("b"), Some(""));
    assert_eq!(rows[0].get("c"), Some(""));
}

#[test]
fn extra_values_are_ignored() {
    let rows = parse("a,b\n1,2,3,4\n");
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[0].get("b"), Some("2"));
}

#[test]
fn quoted_delimiter_stays_in_one_field() {
    let rows = parse("name,n\n\"a,b\",7\n");
    assert_eq!(rows[0].get("name"), Some("a,b"));
    assert_eq!(rows[0].get("n"), Some("7"));
}

#[test]
fn blank_lines_do_not_change_the_result() {
    let dense = "k,v\nx,1\ny,2\nz,3\n";
    let sparse = "\nk,v\n\nx,1\n   \n\ny,2\n\t\nz,3\n\n";
    assert_eq!(parse(dense), parse(sparse));
}

#[test]
fn crlf_line_endings_are_trimmed() {
    let rows = parse("title,impact\r\nNurse,15\r\nClerk,85\r\n");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["title", "impact"]);
    assert_eq!(rows[1].get("impact"), Some("85"));
}

#[test]
fn empty_or_header_only_input_gives_no_rows() {
    assert!(parse("").is_empty());
    assert!(parse("\n \n").is_empty());
    assert!(parse("a,b,c\n").is_empty());
}

#[test]
fn header_echoed_when_not_skipped() {
    let opts = ParseOptions { skip_header: false, ..ParseOptions::default() };
    let rows = parse_csv("a,b\n1,2\n", &opts);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("a"), Some("a"));
    assert_eq!(rows[1].get("b"), Some("2"));
}

#[test]
fn tab_delimiter() {
    let opts = ParseOptions { delimiter: '\t', skip_header: true };
    let rows = parse_csv("a\tb\n\"x\ty\"\t2\n", &opts);
    assert_eq!(rows[0].get("a"), Some("x\ty"));
    assert_eq!(rows[0].get("b"), Some("2"));
}

#[test]
fn end_to_end_job_rows() {
    let text = "title,impact,domain\n\"Data Entry, Clerk\",85,Administrative\nNurse,15,Healthcare\n";
    let rows = parse(text);

    let expected: Vec<RawRecord> = vec![
        [("title", "Data Entry, Clerk"), ("impact", "85"), ("domain", "Administrative")]
            .into_iter()
            .collect(),
        [("title", "Nurse"), ("impact", "15"), ("domain", "Healthcare")].into_iter().collect(),
    ];
    assert_eq!(rows, expected);

    let jobs = transform_job_data(&rows);
    assert_eq!(jobs[0].impact, 85.0);
    assert_eq!(jobs[1].impact, 15.0);
    assert_eq!(jobs[0].risk_tier(), Some(RiskTier::High));
    assert_eq!(jobs[1].risk_tier(), Some(RiskTier::Low));
}
