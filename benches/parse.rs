// benches/parse.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use job_outlook::csv::{ParseOptions, parse_csv};
use job_outlook::records::JobSchema;

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/data/job_data.csv"))
        .expect("read data/job_data.csv")
}

/// Bundled sample repeated until it is a realistically sized export.
fn widen(sample: &str, copies: usize) -> String {
    let mut lines = sample.lines();
    let header = lines.next().unwrap_or_default();
    let body: Vec<&str> = lines.collect();
    let mut out = String::from(header);
    out.push('\n');
    for _ in 0..copies {
        for l in &body {
            out.push_str(l);
            out.push('\n');
        }
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let text = widen(&load_sample(), 500);
    let opts = ParseOptions::resource();

    c.bench_function("parse_job_data", |b| {
        b.iter(|| {
            let rows = parse_csv(black_box(&text), &opts);
            black_box(rows.len())
        })
    });

    let rows = parse_csv(&text, &opts);
    c.bench_function("transform_job_data", |b| {
        b.iter(|| {
            let jobs = JobSchema::JobData.transform(black_box(&rows));
            black_box(jobs.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
