// benches/pack.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use job_outlook::geometry::pack::{Bubble, PackConfig, pack_bubbles};
use job_outlook::showcase;

fn synthetic(n: usize) -> Vec<Bubble> {
    (0..n)
        .map(|i| {
            let id = i.to_string();
            let value = 5.0 + ((i * 37) % 90) as f64;
            Bubble::new(&id, &id, value, ["a", "b", "c", "d"][i % 4])
        })
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let cfg = PackConfig::default();
    let small = showcase::bubbles();
    let large = synthetic(120);

    c.bench_function("pack_showcase", |b| {
        b.iter(|| black_box(pack_bubbles(black_box(&small), &cfg).bubbles.len()))
    });

    c.bench_function("pack_120", |b| {
        b.iter(|| black_box(pack_bubbles(black_box(&large), &cfg).bubbles.len()))
    });
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
