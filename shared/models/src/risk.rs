//! Risk assessment models.
//!
//! Scoring follows a 4x4 likelihood/impact matrix: each axis carries a rank
//! in 1..=4 and the final score is the product of the two ranks.

use serde::{Deserialize, Serialize};

/// Qualitative rating on one axis of the risk matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskRating {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskRating {
    /// Matrix rank, 1 through 4.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::VeryHigh => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

/// Coarse complexity bucket derived from the scoring factors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
}

impl ComplexityTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A completed risk assessment for one contract.
///
/// `score` is always `likelihood.rank() * impact.rank()`; construction goes
/// through [`RiskAssessment::new`] so no other value can appear.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    pub likelihood: RiskRating,
    pub impact: RiskRating,
    pub score: u8,
    pub complexity: ComplexityTier,
}

impl RiskAssessment {
    pub fn new(likelihood: RiskRating, impact: RiskRating, complexity: ComplexityTier) -> Self {
        Self {
            likelihood,
            impact,
            score: likelihood.rank() * impact.rank(),
            complexity,
        }
    }

    /// True for scores in the upper half of the matrix.
    pub fn is_elevated(&self) -> bool {
        self.score >= 8
    }
}
