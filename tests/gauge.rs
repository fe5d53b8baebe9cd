// tests/gauge.rs
use std::f64::consts::TAU;

use job_outlook::geometry::gauge::{GaugeConfig, arc_path, dash_offset, gauge};

#[test]
fn dash_offset_endpoints() {
    let c = TAU * 80.0;
    assert_eq!(dash_offset(0.0, c), c);
    assert_eq!(dash_offset(100.0, c), 0.0);
}

#[test]
fn dash_offset_decreases_with_percentage() {
    let c = TAU * 80.0;
    let mut last = f64::INFINITY;
    for p in 0..=100 {
        let d = dash_offset(p as f64, c);
        assert!(d < last, "not decreasing at {p}");
        last = d;
    }
}

#[test]
fn out_of_range_percentages_clamp() {
    let cfg = GaugeConfig::default();
    assert_eq!(gauge(-20.0, &cfg).percentage, 0.0);
    assert_eq!(gauge(140.0, &cfg).dash_offset, 0.0);
    assert_eq!(gauge(f64::NAN, &cfg).percentage, 0.0);
}

#[test]
fn geometry_fields() {
    let g = gauge(72.0, &GaugeConfig::default());
    assert_eq!(g.size, 220.0);
    assert_eq!(g.center.x, 110.0);
    assert_eq!(g.dash_array, g.circumference);
    assert_eq!(g.rotation_deg, -90.0);
    assert_eq!(g.text, "72%");
}

#[test]
fn half_ring_path() {
    assert_eq!(arc_path(0.0, 200.0, 80.0), "M 100 20 A 80 80 0 0 1 100 20");
    assert!(arc_path(75.0, 200.0, 80.0).contains(" 0 1 1 "));
}
