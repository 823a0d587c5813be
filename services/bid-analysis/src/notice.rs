//! Award notice field extraction.
//!
//! Award and procurement notices are free text with a handful of labelled
//! lines. The extractor pulls them out with fixed patterns; anything it
//! cannot find stays `None` and the notice is still usable.

use regex::Regex;
use tendara_models::{Classification, NoticeFields};

pub struct NoticeExtractor {
    value_patterns: Vec<Regex>,
    duration_patterns: Vec<Regex>,
    risk_pattern: Regex,
    priority_pattern: Regex,
}

impl NoticeExtractor {
    pub fn new() -> Self {
        let value_patterns = [
            r"Contract Value: €([\d,]+)",
            r"Estimated Value: €([\d,]+)",
            r"Value: €([\d,]+)",
        ]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect();

        let duration_patterns = [r"Duration: (\d+ months)", r"Timeline: (\d+ months)"]
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect();

        Self {
            value_patterns,
            duration_patterns,
            // Captures the leading uppercase run after any risk heading,
            // e.g. `HIGH` or `LOW-MEDIUM`
            risk_pattern: Regex::new(r"Risk.*?: ([A-Z-]+)").unwrap(),
            priority_pattern: Regex::new(r"Strategic (?:Priority|Importance): ([A-Z]+)").unwrap(),
        }
    }

    pub fn extract(&self, text: &str) -> NoticeFields {
        NoticeFields {
            contract_value: self.first_capture(&self.value_patterns, text),
            duration: self.first_capture(&self.duration_patterns, text),
            risk_level: self
                .risk_pattern
                .captures(text)
                .map(|c| c[1].to_string()),
            classification: Self::classification(text),
            strategic_priority: self
                .priority_pattern
                .captures(text)
                .map(|c| c[1].to_string()),
            requirements: Self::requirements(text),
        }
    }

    fn first_capture(&self, patterns: &[Regex], text: &str) -> Option<String> {
        patterns
            .iter()
            .find_map(|p| p.captures(text).map(|c| c[1].to_string()))
    }

    fn classification(text: &str) -> Classification {
        if text.contains("NATO UNCLASSIFIED") {
            Classification::Unclassified
        } else if text.contains("NATO SECRET") {
            Classification::Secret
        } else {
            Classification::Unknown
        }
    }

    /// Bullet lines under a requirements heading, capped at five. A blank
    /// line ends the block.
    fn requirements(text: &str) -> Vec<String> {
        let mut requirements = Vec::new();
        let mut in_requirements = false;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.contains("Requirements:") {
                in_requirements = true;
                continue;
            }
            if in_requirements {
                if let Some(rest) = trimmed.strip_prefix('-') {
                    requirements.push(rest.trim().to_string());
                } else if trimmed.is_empty() {
                    break;
                }
            }
        }

        requirements.truncate(5);
        requirements
    }
}

impl Default for NoticeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
