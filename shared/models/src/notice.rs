//! Free-text notice models.
//!
//! Award and procurement notices carry a handful of labelled fields that can
//! be pulled out with plain pattern matching. The extracted fields feed a
//! coarse additive triage that flags notices for closer review.

use serde::{Deserialize, Serialize};

/// Security classification marking found in a notice body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Classification {
    #[serde(rename = "UNCLASSIFIED")]
    Unclassified,
    #[serde(rename = "SECRET")]
    Secret,
    Unknown,
}

/// Triage outcome of the additive notice scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NoticeTriage {
    #[serde(rename = "LOW_RISK")]
    LowRisk,
    #[serde(rename = "MEDIUM_RISK")]
    MediumRisk,
    #[serde(rename = "HIGH_RISK")]
    HighRisk,
}

/// Structured fields extracted from a single notice text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NoticeFields {
    /// Raw value amount as printed, e.g. `3,250,000`.
    pub contract_value: Option<String>,
    /// Raw duration phrase, e.g. `30 months`.
    pub duration: Option<String>,
    /// Risk label following a `Risk ...:` heading, e.g. `HIGH` or `LOW-MEDIUM`.
    pub risk_level: Option<String>,
    pub classification: Classification,
    /// Strategic priority label, e.g. `URGENT`.
    pub strategic_priority: Option<String>,
    /// Bullet lines under a requirements heading, capped at five.
    pub requirements: Vec<String>,
}

impl Default for Classification {
    fn default() -> Self {
        Self::Unknown
    }
}

impl NoticeFields {
    /// Parses the printed value amount into whole euros.
    pub fn value_eur(&self) -> Option<u64> {
        let raw = self.contract_value.as_deref()?;
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    /// Parses the duration phrase into months.
    ///
    /// A duration that mentions months but does not start with a number
    /// counts as twelve, matching the scoring convention.
    pub fn duration_months(&self) -> Option<u32> {
        let raw = self.duration.as_deref()?;
        if !raw.to_lowercase().contains("month") {
            return None;
        }
        let leading = raw.split_whitespace().next().unwrap_or("");
        Some(leading.parse().unwrap_or(12))
    }

    /// Additive triage over value, duration, and priority.
    ///
    /// Value above 2 M scores 3, above 1 M scores 2, else 1. Durations over
    /// 24 months add 2, over 12 add 1. URGENT priority adds 3, HIGH adds 2.
    /// Totals of 6 and above are high risk, 4 and above medium.
    pub fn triage(&self) -> NoticeTriage {
        let mut score: u32 = match self.value_eur().unwrap_or(0) {
            v if v > 2_000_000 => 3,
            v if v > 1_000_000 => 2,
            _ => 1,
        };

        if let Some(months) = self.duration_months() {
            if months > 24 {
                score += 2;
            } else if months > 12 {
                score += 1;
            }
        }

        match self.strategic_priority.as_deref().map(str::to_uppercase).as_deref() {
            Some("URGENT") => score += 3,
            Some("HIGH") => score += 2,
            _ => {}
        }

        match score {
            s if s >= 6 => NoticeTriage::HighRisk,
            s if s >= 4 => NoticeTriage::MediumRisk,
            _ => NoticeTriage::LowRisk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parsing_strips_separators() {
        let fields = NoticeFields {
            contract_value: Some("3,250,000".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.value_eur(), Some(3_250_000));
    }

    #[test]
    fn test_duration_months_non_numeric_defaults() {
        let fields = NoticeFields {
            duration: Some("several months".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.duration_months(), Some(12));

        let fields = NoticeFields {
            duration: Some("30 months".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.duration_months(), Some(30));
    }

    #[test]
    fn test_triage_high_risk_notice() {
        // 3,250,000 EUR (+3), 30 months (+2), URGENT (+3) => 8 => high risk
        let fields = NoticeFields {
            contract_value: Some("3,250,000".to_string()),
            duration: Some("30 months".to_string()),
            strategic_priority: Some("URGENT".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.triage(), NoticeTriage::HighRisk);
    }

    #[test]
    fn test_triage_small_short_notice_is_low_risk() {
        // 890,000 EUR (+1), 18 months (+1) => 2 => low risk
        let fields = NoticeFields {
            contract_value: Some("890,000".to_string()),
            duration: Some("18 months".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.triage(), NoticeTriage::LowRisk);
    }

    #[test]
    fn test_triage_medium_boundary() {
        // 1,200,000 EUR (+2), HIGH priority (+2) => 4 => medium risk
        let fields = NoticeFields {
            contract_value: Some("1,200,000".to_string()),
            strategic_priority: Some("HIGH".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.triage(), NoticeTriage::MediumRisk);
    }
}
