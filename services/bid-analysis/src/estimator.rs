//! Contract value estimation.
//!
//! Values are not printed in bid opening tables, so the pipeline estimates
//! them: a fixed base value, scaled by the largest matching keyword
//! multiplier, then jittered by a uniform factor in [0.7, 1.5). The jitter
//! source is injected so runs can be reproduced and tests can assert exact
//! outputs.

use rand::Rng;

/// Keyword multipliers applied to the base value. The maximum matching
/// multiplier wins; titles matching nothing keep the base value.
const VALUE_MULTIPLIERS: &[(&str, u64)] = &[
    ("SATELLITE", 50),
    ("AIRCRAFT", 30),
    ("SIMULATOR", 20),
    ("CONSTRUCTION", 15),
    ("FUEL", 10),
    ("VEHICLE", 8),
    ("AMMUNITION", 5),
    ("TRAINING", 4),
    ("MEDICAL", 3),
];

pub struct ValueEstimator {
    base_value_eur: u64,
}

impl ValueEstimator {
    pub fn new(base_value_eur: u64) -> Self {
        Self { base_value_eur }
    }

    /// Largest multiplier whose keyword occurs in the uppercased title.
    pub fn multiplier_for(&self, title: &str) -> u64 {
        let upper = title.to_uppercase();
        VALUE_MULTIPLIERS
            .iter()
            .filter(|(keyword, _)| upper.contains(keyword))
            .map(|(_, multiplier)| *multiplier)
            .max()
            .unwrap_or(1)
    }

    /// Estimated contract value in whole euros.
    pub fn estimate<R: Rng>(&self, title: &str, rng: &mut R) -> u64 {
        let multiplier = self.multiplier_for(title);
        let jitter = rng.random_range(0.7..1.5);
        (self.base_value_eur as f64 * multiplier as f64 * jitter) as u64
    }
}
