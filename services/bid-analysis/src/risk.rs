//! Contract risk scoring.
//!
//! Three weak signals (estimated value, competition, category) are combined
//! into a base risk number, which is bucketed into a likelihood tier. The
//! impact rating is then sampled from a distribution conditioned on that
//! tier, and the final score is the product of the two matrix ranks.

use rand::Rng;
use tendara_models::{ComplexityTier, ContractCategory, RiskAssessment, RiskRating};

/// Titles containing any of these carry the elevated complexity factor.
const COMPLEXITY_KEYWORDS: [&str; 5] = ["SATELLITE", "SIMULATOR", "CYBER", "AI", "ADVANCED"];

const COMPLEXITY_FACTOR_ELEVATED: f64 = 1.3;

pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    /// Per-category risk weighting.
    fn category_factor(category: ContractCategory) -> f64 {
        match category {
            ContractCategory::DefenseSystems => 1.6,
            ContractCategory::Communications => 1.5,
            ContractCategory::ItInfrastructure => 1.4,
            ContractCategory::Construction => 1.2,
            ContractCategory::Ammunition => 1.1,
            ContractCategory::MedicalEquipment => 1.0,
            ContractCategory::LogisticsSupport => 0.9,
            _ => 1.0,
        }
    }

    fn complexity_factor(title: &str) -> f64 {
        let upper = title.to_uppercase();
        if COMPLEXITY_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            COMPLEXITY_FACTOR_ELEVATED
        } else {
            1.0
        }
    }

    /// The unbucketed risk number. Exposed for threshold tests.
    pub fn base_risk(
        &self,
        title: &str,
        category: ContractCategory,
        value_eur: u64,
        bidder_count: u32,
    ) -> f64 {
        let value_risk = (value_eur as f64 / 10_000_000.0).min(4.0);
        let competition_risk = if bidder_count <= 1 {
            4.0
        } else {
            (5.0 - bidder_count as f64).max(1.0)
        };

        (value_risk + competition_risk) * Self::category_factor(category) * Self::complexity_factor(title)
    }

    /// Full assessment: likelihood tier, sampled impact, product score, and
    /// complexity tier.
    pub fn assess<R: Rng>(
        &self,
        title: &str,
        category: ContractCategory,
        value_eur: u64,
        bidder_count: u32,
        rng: &mut R,
    ) -> RiskAssessment {
        let base_risk = self.base_risk(title, category, value_eur, bidder_count);

        let (likelihood, impact) = if base_risk <= 3.0 {
            let impact = if rng.random_bool(0.7) { RiskRating::Low } else { RiskRating::Medium };
            (RiskRating::Low, impact)
        } else if base_risk <= 6.0 {
            let impact = if rng.random_bool(0.6) { RiskRating::Medium } else { RiskRating::High };
            (RiskRating::Medium, impact)
        } else if base_risk <= 9.0 {
            let impact = if rng.random_bool(0.7) { RiskRating::High } else { RiskRating::VeryHigh };
            (RiskRating::High, impact)
        } else {
            let impact = if rng.random_bool(0.3) { RiskRating::High } else { RiskRating::VeryHigh };
            (RiskRating::VeryHigh, impact)
        };

        let complexity = if Self::complexity_factor(title) > 1.2 {
            ComplexityTier::High
        } else if Self::category_factor(category) > 1.2 {
            ComplexityTier::Medium
        } else {
            ComplexityTier::Low
        };

        RiskAssessment::new(likelihood, impact, complexity)
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
