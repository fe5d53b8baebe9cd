// tests/risk.rs
//
// One set of thresholds for gauge color, explanations, and filters.
//
use job_outlook::geometry::gauge::{GaugeConfig, gauge};
use job_outlook::records::RiskTier;

#[test]
fn gauge_and_classifier_agree_over_whole_range() {
    let cfg = GaugeConfig::default();
    // Quarter steps catch the boundaries exactly.
    for i in 0..=400 {
        let v = i as f64 / 4.0;
        let tier = RiskTier::classify(v);
        let g = gauge(v, &cfg);
        assert_eq!(g.tier, tier, "at {v}");
        assert_eq!(g.color, tier.color(), "at {v}");
        assert!(tier.contains(v));
    }
}

#[test]
fn thresholds() {
    assert_eq!(RiskTier::classify(29.99), RiskTier::Low);
    assert_eq!(RiskTier::classify(30.0), RiskTier::Medium);
    assert_eq!(RiskTier::classify(69.99), RiskTier::Medium);
    assert_eq!(RiskTier::classify(70.0), RiskTier::High);
    assert_eq!(RiskTier::try_classify(f64::NAN), None);
}

#[test]
fn explicit_gauge_color_wins() {
    let cfg = GaugeConfig { color: Some("#123456".into()), ..GaugeConfig::default() };
    let g = gauge(90.0, &cfg);
    assert_eq!(g.tier, RiskTier::High);
    assert_eq!(g.color, "#123456");
}
