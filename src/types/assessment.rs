//! Assessment types: RiskLabel, RiskBand, RiskAssessment, ScoreBreakdown

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::defaults::{
    CONFIDENCE_CEILING, CONFIDENCE_FLOOR, DECISION_THRESHOLD, MODERATE_BAND_FLOOR,
};

/// Binary classification of the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "Likely Fertile")]
    LikelyFertile,
    #[serde(rename = "Likely Infertile")]
    LikelyInfertile,
}

impl RiskLabel {
    /// Inclusive threshold: a score of exactly 55 is "Likely Infertile".
    pub fn from_score(score: f64) -> Self {
        if score >= DECISION_THRESHOLD {
            RiskLabel::LikelyInfertile
        } else {
            RiskLabel::LikelyFertile
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::LikelyFertile => write!(f, "Likely Fertile"),
            RiskLabel::LikelyInfertile => write!(f, "Likely Infertile"),
        }
    }
}

/// Three-way banding of the score used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score < MODERATE_BAND_FLOOR {
            RiskBand::Low
        } else if score < DECISION_THRESHOLD {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskBand::Low => write!(f, "Low"),
            RiskBand::Moderate => write!(f, "Moderate"),
            RiskBand::High => write!(f, "High"),
        }
    }
}

/// Scorer output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk index in [0, 100]
    pub score: f64,
    pub label: RiskLabel,
    /// Distance-from-boundary confidence in [0.55, 0.95]; not a calibrated probability
    pub confidence: f64,
}

impl RiskAssessment {
    /// Derive label and confidence from an already-clamped score.
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            label: RiskLabel::from_score(score),
            confidence: confidence_for(score),
        }
    }

    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.score)
    }

    pub fn is_high_risk(&self) -> bool {
        self.label == RiskLabel::LikelyInfertile
    }
}

/// Monotone in |score - 55|, clamped to [0.55, 0.95].
pub fn confidence_for(score: f64) -> f64 {
    (CONFIDENCE_FLOOR + (score - DECISION_THRESHOLD).abs() / 100.0)
        .clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

// ============================================================================
// Score Breakdown
// ============================================================================

/// One additive contribution to the raw score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTerm {
    /// Factor name, e.g. `amh` or `flag:pcos`
    pub factor: String,
    pub points: f64,
}

/// Every term that went into a score, before clamping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub terms: Vec<ScoreTerm>,
}

impl ScoreBreakdown {
    pub(crate) fn push(&mut self, factor: impl Into<String>, points: f64) {
        self.terms.push(ScoreTerm {
            factor: factor.into(),
            points,
        });
    }

    /// Sum of all terms, unclamped.
    pub fn raw_total(&self) -> f64 {
        self.terms.iter().map(|t| t.points).sum()
    }

    /// Raw total clamped to [0, 100].
    pub fn score(&self) -> f64 {
        self.raw_total().clamp(0.0, 100.0)
    }

    pub fn points_for(&self, factor: &str) -> Option<f64> {
        self.terms
            .iter()
            .find(|t| t.factor == factor)
            .map(|t| t.points)
    }
}
