//! Contract domain models for the Tendara bid intelligence system.
//!
//! This module defines the core contract-related data structures extracted
//! from bid opening tables, including the contract record, category set,
//! technology tiers, and value buckets.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::risk::{ComplexityTier, RiskAssessment, RiskRating};

/// Fixed category set for procurement contracts.
///
/// The declaration order here is the classification precedence: the
/// classifier scans categories in this order and the first keyword hit wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContractCategory {
    Ammunition,
    #[serde(rename = "Logistics_Support")]
    LogisticsSupport,
    #[serde(rename = "IT_Infrastructure")]
    ItInfrastructure,
    #[serde(rename = "Medical_Equipment")]
    MedicalEquipment,
    Communications,
    #[serde(rename = "Vehicles_Transport")]
    VehiclesTransport,
    Construction,
    Training,
    #[serde(rename = "Fuel_Energy")]
    FuelEnergy,
    #[serde(rename = "Defense_Systems")]
    DefenseSystems,
    Other,
}

impl ContractCategory {
    /// All categories in declaration order, used for one-hot feature columns.
    pub const ALL: [ContractCategory; 11] = [
        ContractCategory::Ammunition,
        ContractCategory::LogisticsSupport,
        ContractCategory::ItInfrastructure,
        ContractCategory::MedicalEquipment,
        ContractCategory::Communications,
        ContractCategory::VehiclesTransport,
        ContractCategory::Construction,
        ContractCategory::Training,
        ContractCategory::FuelEnergy,
        ContractCategory::DefenseSystems,
        ContractCategory::Other,
    ];

    /// Label used in output tables and summary keys.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ammunition => "Ammunition",
            Self::LogisticsSupport => "Logistics_Support",
            Self::ItInfrastructure => "IT_Infrastructure",
            Self::MedicalEquipment => "Medical_Equipment",
            Self::Communications => "Communications",
            Self::VehiclesTransport => "Vehicles_Transport",
            Self::Construction => "Construction",
            Self::Training => "Training",
            Self::FuelEnergy => "Fuel_Energy",
            Self::DefenseSystems => "Defense_Systems",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ContractCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Technology complexity tier derived from title keywords.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TechnologyTier {
    Low,
    Medium,
    High,
}

const HIGH_TECH_KEYWORDS: [&str; 6] = ["SATELLITE", "AI", "CYBER", "ADVANCED", "SIMULATOR", "RADAR"];
const MEDIUM_TECH_KEYWORDS: [&str; 4] = ["ELECTRONIC", "COMMUNICATION", "SOFTWARE", "SYSTEM"];

impl TechnologyTier {
    /// All tiers in ascending order, used for one-hot feature columns.
    pub const ALL: [TechnologyTier; 3] =
        [TechnologyTier::Low, TechnologyTier::Medium, TechnologyTier::High];

    /// Classify a contract title into a technology tier.
    pub fn from_title(title: &str) -> Self {
        let upper = title.to_uppercase();
        if HIGH_TECH_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            Self::High
        } else if MEDIUM_TECH_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Coarse contract size bucket over the estimated value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueBucket {
    Small,
    Medium,
    Large,
    #[serde(rename = "Very_Large")]
    VeryLarge,
}

impl ValueBucket {
    /// Bucket boundaries are right-inclusive: 2 M EUR is still `Small`.
    pub fn from_value(value_eur: u64) -> Self {
        match value_eur {
            v if v <= 2_000_000 => Self::Small,
            v if v <= 10_000_000 => Self::Medium,
            v if v <= 50_000_000 => Self::Large,
            _ => Self::VeryLarge,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::VeryLarge => "Very_Large",
        }
    }
}

/// A single contract extracted from a bid opening table row.
///
/// Built once per accepted row and never mutated afterwards; the record is
/// written straight to the output tables.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ContractRecord {
    #[validate(length(min = 1, max = 64, message = "Contract id must be between 1 and 64 characters"))]
    pub contract_id: String,
    #[validate(length(min = 1, max = 512, message = "Title must be between 1 and 512 characters"))]
    pub title: String,
    pub category: ContractCategory,
    pub closing_date: String,
    pub bidders: String,
    pub country: String,
    #[validate(range(max = 10, message = "Bidder count is capped at 10"))]
    pub bidder_count: u32,
    pub estimated_value_eur: u64,
    #[validate(range(min = 2000, max = 2100, message = "Year out of range"))]
    pub year: u16,
    pub risk_likelihood: RiskRating,
    pub risk_impact: RiskRating,
    #[validate(range(min = 1, max = 16, message = "Risk score must be between 1 and 16"))]
    pub risk_score: u8,
    pub complexity: ComplexityTier,
    pub is_multinational: bool,
    pub technology: TechnologyTier,
}

impl ContractRecord {
    /// Rebuilds the risk assessment view over the flat risk fields.
    pub fn risk_assessment(&self) -> RiskAssessment {
        RiskAssessment::new(self.risk_likelihood, self.risk_impact, self.complexity)
    }

    pub fn value_bucket(&self) -> ValueBucket {
        ValueBucket::from_value(self.estimated_value_eur)
    }

    pub fn is_high_tech(&self) -> bool {
        self.technology == TechnologyTier::High
    }

    pub fn is_complex(&self) -> bool {
        self.complexity == ComplexityTier::High
    }

    /// Natural log of (1 + value), the scale used by the feature table.
    pub fn log_value(&self) -> f64 {
        (1.0 + self.estimated_value_eur as f64).ln()
    }
}
