//! Risk report types.
//!
//! Represents the output of a heart attack risk assessment, whether produced
//! by a remote prediction model or by the local fallback scorer.

use serde::{Deserialize, Serialize};

/// Risk level classification for heart attack risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Probability at or below 30%
    Low,
    /// Probability above 30%
    Moderate,
    /// Probability above 50%
    High,
    /// Probability above 70%
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Classify a clamped probability percentage (0-100).
    ///
    /// Thresholds are exclusive: exactly 70.0 is `High`, not `VeryHigh`.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability > 70.0 {
            Self::VeryHigh
        } else if probability > 50.0 {
            Self::High
        } else if probability > 30.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Display color associated with the level.
    #[must_use]
    pub fn color(&self) -> RiskColor {
        match self {
            Self::Low => RiskColor::Green,
            Self::Moderate => RiskColor::Yellow,
            Self::High => RiskColor::Orange,
            Self::VeryHigh => RiskColor::Red,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// Display color for a risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl RiskColor {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for RiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const HIGH_RISK_RECOMMENDATION: &str =
    "High risk detected. Please consult a cardiologist immediately for comprehensive evaluation.";
pub const MODERATE_RISK_RECOMMENDATION: &str = "Moderate risk detected. Consider lifestyle modifications and regular check-ups with your healthcare provider.";
pub const LOW_RISK_RECOMMENDATION: &str =
    "Low risk detected. Continue maintaining a healthy lifestyle and regular health monitoring.";

/// Select the recommendation text for a clamped probability percentage.
///
/// Bands are coarser than [`RiskLevel`]: `High` and `VeryHigh` share one text.
#[must_use]
pub fn recommendation_for(probability: f64) -> &'static str {
    if probability > 50.0 {
        HIGH_RISK_RECOMMENDATION
    } else if probability > 30.0 {
        MODERATE_RISK_RECOMMENDATION
    } else {
        LOW_RISK_RECOMMENDATION
    }
}

/// Outcome of a single risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Risk probability in percent, always within [0, 100]
    pub probability_percentage: f64,

    /// Risk classification derived from the probability
    pub risk_level: RiskLevel,

    /// Display color derived from the risk level
    pub risk_color: RiskColor,

    /// One explanation per rule that contributed to the score
    pub risk_factors: Vec<String>,

    /// Advice matching the probability band
    pub recommendation: String,
}

impl RiskReport {
    /// Build a report from a raw probability percentage.
    ///
    /// The probability is clamped to [0, 100] before classification; a NaN
    /// input is treated as 0.
    #[must_use]
    pub fn from_probability(probability: f64, risk_factors: Vec<String>) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 100.0)
        };
        let risk_level = RiskLevel::from_probability(probability);

        Self {
            probability_percentage: probability,
            risk_level,
            risk_color: risk_level.color(),
            risk_factors,
            recommendation: recommendation_for(probability).to_string(),
        }
    }

    /// Summary line reported alongside the numbers.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Heart attack risk assessment completed. Risk probability: {:.1}%",
            self.probability_percentage
        )
    }
}
