// src/records/risk.rs
use serde::{Deserialize, Serialize};

use crate::config::consts::{
    HIGH_RISK_COLOR, HIGH_RISK_FROM, LOW_RISK_COLOR, MEDIUM_RISK_COLOR, MEDIUM_RISK_FROM,
};

/// Automation-risk tier of an impact score (0..=100).
///
/// Every consumer (gauge color, explorer text, search filter) classifies
/// through here so the thresholds cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    /// low: v < 30, medium: 30 <= v < 70, high: v >= 70.
    /// A non-finite score lands in `Low`; use `try_classify` to tell it apart.
    pub fn classify(impact: f64) -> RiskTier {
        Self::try_classify(impact).unwrap_or(RiskTier::Low)
    }

    pub fn try_classify(impact: f64) -> Option<RiskTier> {
        if impact.is_nan() {
            None
        } else if impact < MEDIUM_RISK_FROM {
            Some(RiskTier::Low)
        } else if impact < HIGH_RISK_FROM {
            Some(RiskTier::Medium)
        } else {
            Some(RiskTier::High)
        }
    }

    pub fn contains(self, impact: f64) -> bool {
        Self::try_classify(impact) == Some(self)
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }

    /// Short level name as the job tables spell it.
    pub fn level_name(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            RiskTier::Low => "Low automation risk. This role requires human skills like creativity, empathy, or complex problem-solving that AI cannot easily replicate.",
            RiskTier::Medium => "Moderate automation risk. While some tasks may be automated, this role involves skills and responsibilities that still require human judgment and intervention.",
            RiskTier::High => "High automation risk. Many tasks in this role could be automated by AI systems in the coming years, potentially reducing demand for this position.",
        }
    }

    /// Hex color used by the gauge for this tier.
    pub fn color(self) -> &'static str {
        match self {
            RiskTier::Low => LOW_RISK_COLOR,
            RiskTier::Medium => MEDIUM_RISK_COLOR,
            RiskTier::High => HIGH_RISK_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(RiskTier::classify(0.0), RiskTier::Low);
        assert_eq!(RiskTier::classify(29.999), RiskTier::Low);
        assert_eq!(RiskTier::classify(30.0), RiskTier::Medium);
        assert_eq!(RiskTier::classify(69.999), RiskTier::Medium);
        assert_eq!(RiskTier::classify(70.0), RiskTier::High);
        assert_eq!(RiskTier::classify(100.0), RiskTier::High);
    }

    #[test]
    fn nan_has_no_tier() {
        assert_eq!(RiskTier::try_classify(f64::NAN), None);
        assert!(!RiskTier::Low.contains(f64::NAN));
    }
}
