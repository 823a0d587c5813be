//! Derived dataset models.
//!
//! The pipeline emits two tables next to the raw contract records: a
//! numeric feature table for model training and a JSON summary of the run.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::{ContractCategory, ContractRecord, TechnologyTier, ValueBucket};

/// One row of the training feature table.
///
/// Categorical columns are one-hot encoded in the fixed order given by
/// [`ContractCategory::ALL`] and [`TechnologyTier::ALL`]; `risk_score` is the
/// training target and always the last column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub estimated_value_eur: u64,
    pub log_value: f64,
    pub bidder_count: u32,
    pub is_high_tech: bool,
    pub is_complex: bool,
    pub is_multinational: bool,
    pub value_bucket: ValueBucket,
    pub category: ContractCategory,
    pub technology: TechnologyTier,
    pub risk_score: u8,
}

impl FeatureRow {
    pub fn from_record(record: &ContractRecord) -> Self {
        Self {
            estimated_value_eur: record.estimated_value_eur,
            log_value: record.log_value(),
            bidder_count: record.bidder_count,
            is_high_tech: record.is_high_tech(),
            is_complex: record.is_complex(),
            is_multinational: record.is_multinational,
            value_bucket: record.value_bucket(),
            category: record.category,
            technology: record.technology,
            risk_score: record.risk_score,
        }
    }

    /// Column names, in the exact order produced by [`FeatureRow::values`].
    pub fn header() -> Vec<String> {
        let mut columns = vec![
            "estimated_value_eur".to_string(),
            "log_value".to_string(),
            "bidder_count".to_string(),
            "is_high_tech".to_string(),
            "is_complex".to_string(),
            "is_multinational".to_string(),
            "value_bucket".to_string(),
        ];
        columns.extend(ContractCategory::ALL.iter().map(|c| format!("type_{}", c.label())));
        columns.extend(TechnologyTier::ALL.iter().map(|t| format!("tech_{}", t.label())));
        columns.push("risk_score".to_string());
        columns
    }

    /// Cell values matching [`FeatureRow::header`].
    pub fn values(&self) -> Vec<String> {
        let mut cells = vec![
            self.estimated_value_eur.to_string(),
            format!("{:.6}", self.log_value),
            self.bidder_count.to_string(),
            u8::from(self.is_high_tech).to_string(),
            u8::from(self.is_complex).to_string(),
            u8::from(self.is_multinational).to_string(),
            self.value_bucket.label().to_string(),
        ];
        cells.extend(
            ContractCategory::ALL
                .iter()
                .map(|c| u8::from(*c == self.category).to_string()),
        );
        cells.extend(
            TechnologyTier::ALL
                .iter()
                .map(|t| u8::from(*t == self.technology).to_string()),
        );
        cells.push(self.risk_score.to_string());
        cells
    }
}

/// Aggregate summary of one pipeline run, written as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetSummary {
    pub total_contracts: usize,
    pub years_covered: Vec<u16>,
    pub contract_types: BTreeMap<String, usize>,
    pub avg_value_eur: u64,
    pub risk_distribution: BTreeMap<u8, usize>,
    pub generated_at: DateTime<Utc>,
}

impl DatasetSummary {
    pub fn from_records(records: &[ContractRecord]) -> Self {
        let mut years: Vec<u16> = records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();

        let mut contract_types = BTreeMap::new();
        let mut risk_distribution = BTreeMap::new();
        for record in records {
            *contract_types.entry(record.category.label().to_string()).or_insert(0) += 1;
            *risk_distribution.entry(record.risk_score).or_insert(0) += 1;
        }

        let avg_value_eur = if records.is_empty() {
            0
        } else {
            records.iter().map(|r| r.estimated_value_eur).sum::<u64>() / records.len() as u64
        };

        Self {
            total_contracts: records.len(),
            years_covered: years,
            contract_types,
            avg_value_eur,
            risk_distribution,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{ComplexityTier, RiskRating};

    fn record(category: ContractCategory, value: u64, score_pair: (RiskRating, RiskRating), year: u16) -> ContractRecord {
        ContractRecord {
            contract_id: "25/0001".to_string(),
            title: "Test contract".to_string(),
            category,
            closing_date: "01-Jan-2025".to_string(),
            bidders: "Acme GmbH".to_string(),
            country: "Germany".to_string(),
            bidder_count: 1,
            estimated_value_eur: value,
            year,
            risk_likelihood: score_pair.0,
            risk_impact: score_pair.1,
            risk_score: score_pair.0.rank() * score_pair.1.rank(),
            complexity: ComplexityTier::Low,
            is_multinational: false,
            technology: TechnologyTier::Low,
        }
    }

    #[test]
    fn test_feature_header_and_values_align() {
        let row = FeatureRow::from_record(&record(
            ContractCategory::Communications,
            50_000_000,
            (RiskRating::High, RiskRating::High),
            2024,
        ));
        let header = FeatureRow::header();
        let values = row.values();
        assert_eq!(header.len(), values.len());
        assert_eq!(header.last().unwrap(), "risk_score");
        assert_eq!(values.last().unwrap(), "9");

        // Exactly one category column and one tech column are hot
        let type_ones = header
            .iter()
            .zip(&values)
            .filter(|(h, v)| h.starts_with("type_") && v.as_str() == "1")
            .count();
        let tech_ones = header
            .iter()
            .zip(&values)
            .filter(|(h, v)| h.starts_with("tech_") && v.as_str() == "1")
            .count();
        assert_eq!(type_ones, 1);
        assert_eq!(tech_ones, 1);
    }

    #[test]
    fn test_summary_aggregation() {
        let records = vec![
            record(ContractCategory::Ammunition, 1_000_000, (RiskRating::Low, RiskRating::Low), 2023),
            record(ContractCategory::Ammunition, 3_000_000, (RiskRating::Medium, RiskRating::High), 2024),
            record(ContractCategory::Training, 2_000_000, (RiskRating::Low, RiskRating::Low), 2023),
        ];
        let summary = DatasetSummary::from_records(&records);

        assert_eq!(summary.total_contracts, 3);
        assert_eq!(summary.years_covered, vec![2023, 2024]);
        assert_eq!(summary.contract_types["Ammunition"], 2);
        assert_eq!(summary.contract_types["Training"], 1);
        assert_eq!(summary.avg_value_eur, 2_000_000);
        assert_eq!(summary.risk_distribution[&1], 2);
        assert_eq!(summary.risk_distribution[&6], 1);
    }

    #[test]
    fn test_summary_of_empty_run() {
        let summary = DatasetSummary::from_records(&[]);
        assert_eq!(summary.total_contracts, 0);
        assert_eq!(summary.avg_value_eur, 0);
        assert!(summary.years_covered.is_empty());
    }
}
