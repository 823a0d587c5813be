//! # Tendara Core Domain Models
//!
//! This module contains the core domain models for the Tendara procurement
//! bid intelligence system. All models implement serialization and
//! deserialization with serde; records that cross the output boundary carry
//! validation rules from the validator crate.
//!
//! ## Key Models
//!
//! - **ContractRecord**: a contract extracted from a bid opening table row,
//!   with category, value estimate, and risk assessment
//! - **RiskAssessment**: likelihood/impact pair on a 4x4 matrix with the
//!   product score
//! - **NoticeFields**: labelled fields pulled from free-text award notices,
//!   with an additive triage
//! - **FeatureRow / DatasetSummary**: derived training table and run summary

pub mod contract;
pub mod dataset;
pub mod notice;
pub mod risk;


pub use contract::{ContractCategory, ContractRecord, TechnologyTier, ValueBucket};
pub use dataset::{DatasetSummary, FeatureRow};
pub use notice::{Classification, NoticeFields, NoticeTriage};
pub use risk::{ComplexityTier, RiskAssessment, RiskRating};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_assessment_view_matches_flat_fields() {
        let record = ContractRecord {
            contract_id: "24/0117".to_string(),
            title: "SATELLITE Communication Shelter Contract".to_string(),
            category: ContractCategory::Communications,
            closing_date: "15-Mar-2024".to_string(),
            bidders: "Thales\nAirbus Defence".to_string(),
            country: "Luxembourg".to_string(),
            bidder_count: 2,
            estimated_value_eur: 48_200_000,
            year: 2024,
            risk_likelihood: RiskRating::High,
            risk_impact: RiskRating::VeryHigh,
            risk_score: 12,
            complexity: ComplexityTier::High,
            is_multinational: false,
            technology: TechnologyTier::High,
        };

        let assessment = record.risk_assessment();
        assert_eq!(assessment.score, record.risk_score);
        assert_eq!(assessment.likelihood, RiskRating::High);
        assert!(record.is_high_tech());
        assert!(record.is_complex());
        assert_eq!(record.value_bucket(), ValueBucket::Large);
    }

    #[test]
    fn test_record_validation() {
        use validator::Validate;

        let mut record = ContractRecord {
            contract_id: "24/0117".to_string(),
            title: "Cargo trailer procurement".to_string(),
            category: ContractCategory::VehiclesTransport,
            closing_date: String::new(),
            bidders: String::new(),
            country: String::new(),
            bidder_count: 0,
            estimated_value_eur: 1_000_000,
            year: 2025,
            risk_likelihood: RiskRating::Low,
            risk_impact: RiskRating::Low,
            risk_score: 1,
            complexity: ComplexityTier::Low,
            is_multinational: false,
            technology: TechnologyTier::Low,
        };
        assert!(record.validate().is_ok());

        record.title = String::new();
        assert!(record.validate().is_err());
    }
}
