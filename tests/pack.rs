// tests/pack.rs
use job_outlook::geometry::pack::{Bubble, PackConfig, pack_bubbles};
use job_outlook::showcase;

const TOL: f64 = 1e-6;

#[test]
fn areas_follow_values() {
    let g = pack_bubbles(&showcase::bubbles(), &PackConfig::default());
    let b = &g.bubbles;
    for i in 0..b.len() {
        for j in 0..b.len() {
            let area_ratio = (b[i].r * b[i].r) / (b[j].r * b[j].r);
            let value_ratio = b[i].value / b[j].value;
            assert!((area_ratio - value_ratio).abs() < 1e-6 * value_ratio.max(1.0), "{} vs {}", b[i].id, b[j].id);
        }
    }
}

#[test]
fn circles_do_not_overlap() {
    let cfg = PackConfig::default();
    let g = pack_bubbles(&showcase::bubbles(), &cfg);
    let b = &g.bubbles;
    for i in 0..b.len() {
        for j in i + 1..b.len() {
            let d = b[i].center.distance(b[j].center);
            assert!(d + TOL >= b[i].r + b[j].r, "{} overlaps {}", b[i].id, b[j].id);
        }
    }
}

#[test]
fn circles_fit_the_box() {
    let cfg = PackConfig { width: 400.0, height: 300.0, ..PackConfig::default() };
    let g = pack_bubbles(&showcase::bubbles(), &cfg);
    for c in &g.bubbles {
        assert!(c.center.x - c.r >= -TOL && c.center.x + c.r <= cfg.width + TOL);
        assert!(c.center.y - c.r >= -TOL && c.center.y + c.r <= cfg.height + TOL);
    }
}

#[test]
fn non_positive_values_get_no_area() {
    let data = vec![
        Bubble::new("a", "A", 50.0, "x"),
        Bubble::new("b", "B", 0.0, "x"),
        Bubble::new("c", "C", f64::NAN, "y"),
    ];
    let g = pack_bubbles(&data, &PackConfig::default());
    assert!(g.bubbles[0].r > 0.0);
    assert_eq!(g.bubbles[1].r, 0.0);
    assert_eq!(g.bubbles[2].r, 0.0);
}

#[test]
fn legend_lists_categories_in_order() {
    let g = pack_bubbles(&showcase::bubbles(), &PackConfig::default());
    let cats: Vec<&str> = g.legend.iter().map(|(c, _)| c.as_str()).collect();
    let mut seen: Vec<&str> = Vec::new();
    for b in &g.bubbles {
        if !seen.contains(&b.category.as_str()) {
            seen.push(&b.category);
        }
    }
    assert_eq!(cats, seen);
}

#[test]
fn empty_input() {
    let g = pack_bubbles(&[], &PackConfig::default());
    assert!(g.bubbles.is_empty());
    assert!(g.legend.is_empty());
}
