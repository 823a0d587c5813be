//! Contract category classification.
//!
//! Categories are assigned by scanning an ordered keyword table against the
//! uppercased contract title. The table order is the documented precedence:
//! the first category with a keyword hit wins, and titles matching nothing
//! fall back to `Other`.

use tendara_models::ContractCategory;

/// Ordered (category, keywords) pairs. Reordering entries changes
/// classification results for titles that hit more than one set.
const CATEGORY_KEYWORDS: &[(ContractCategory, &[&str])] = &[
    (ContractCategory::Ammunition, &["CARTRIDGE", "PROJECTILE", "MORTAR", "BOMBS", "MUNITION"]),
    (ContractCategory::LogisticsSupport, &["LOGISTIC", "SUPPORT", "MAINTENANCE", "SUPPLY"]),
    (ContractCategory::ItInfrastructure, &["MICROSOFT", "INFRASTRUCTURE", "SOFTWARE", "SYSTEM"]),
    (ContractCategory::MedicalEquipment, &["MEDICAL", "SURGICAL", "HEATER", "INFUSION"]),
    (ContractCategory::Communications, &["COMMUNICATION", "SATELLITE", "CIS", "SHELTER"]),
    (ContractCategory::VehiclesTransport, &["VEHICLE", "TRUCK", "TRAILER", "CARGO"]),
    (ContractCategory::Construction, &["CONSTRUCTION", "BUILDING", "WAREHOUSE"]),
    (ContractCategory::Training, &["TRAINING", "SIMULATOR", "SERVICES"]),
    (ContractCategory::FuelEnergy, &["FUEL", "GENERATOR", "POWER", "UPS"]),
    (ContractCategory::DefenseSystems, &["DEFENSE", "SECURITY", "GBAD", "RADAR"]),
];

/// Keyword-table classifier over contract titles.
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, title: &str) -> ContractCategory {
        let upper = title.to_uppercase();

        for (category, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|kw| upper.contains(kw)) {
                return *category;
            }
        }

        ContractCategory::Other
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword_titles() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.classify("120mm MORTAR rounds"), ContractCategory::Ammunition);
        assert_eq!(classifier.classify("Forklift truck lease"), ContractCategory::VehiclesTransport);
        assert_eq!(classifier.classify("Diesel generator sets"), ContractCategory::FuelEnergy);
        assert_eq!(classifier.classify("Surgical instrument kits"), ContractCategory::MedicalEquipment);
    }

    #[test]
    fn test_no_keyword_falls_back_to_other() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.classify("Office furniture"), ContractCategory::Other);
        assert_eq!(classifier.classify(""), ContractCategory::Other);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.classify("satellite ground terminal"), ContractCategory::Communications);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let classifier = CategoryClassifier::new();
        // MAINTENANCE (Logistics_Support) precedes SATELLITE (Communications)
        assert_eq!(
            classifier.classify("Maintenance of satellite ground segment"),
            ContractCategory::LogisticsSupport
        );
        // The worked example: COMMUNICATION hits before Defense_Systems is reached
        assert_eq!(
            classifier.classify("SATELLITE Communication Shelter Contract"),
            ContractCategory::Communications
        );
    }
}
