//! Suitability scoring for crop candidates.

use serde::Serialize;

use crate::domain::{CropProfile, RecommendationQuery, ToleranceBand};

use super::types::FactorScores;
use super::NEUTRAL_BAND_FIT;

/// Weights for the four suitability factors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoringWeights {
    /// Weight for the soil type match (default: 0.30)
    pub soil: f64,
    /// Weight for the district match (default: 0.20)
    pub district: f64,
    /// Weight for the temperature band fit (default: 0.25)
    pub temperature: f64,
    /// Weight for the rainfall band fit (default: 0.25)
    pub rainfall: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.soil + self.district + self.temperature + self.rainfall
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

/// Computes suitability scores for a single (crop, query) pair.
///
/// Pure and deterministic: no I/O, no hidden state, never mutates the
/// profile it scores.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreCalculator {
    weights: ScoringWeights,
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self { weights: ScoringWeights::default() }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Per-factor sub-scores, each in [0, 1].
    pub fn factor_scores(&self, crop: &CropProfile, query: &RecommendationQuery) -> FactorScores {
        FactorScores {
            soil: if crop.tolerates_soil(query.soil_type) { 1.0 } else { 0.0 },
            district: if crop.grows_in_district(&query.district) { 1.0 } else { 0.0 },
            temperature: band_fit(crop.temperature_band(), query.temperature),
            rainfall: band_fit(crop.rainfall_band(), query.rainfall),
        }
    }

    /// Weighted total of the sub-scores.
    ///
    /// The clamp is normally inert (the weighted maxima sum to 1.0) but it is
    /// kept as the hard upper bound of the score's contract.
    pub fn total_score(&self, factors: &FactorScores) -> f64 {
        let total = factors.soil * self.weights.soil
            + factors.district * self.weights.district
            + factors.temperature * self.weights.temperature
            + factors.rainfall * self.weights.rainfall;

        total.min(1.0)
    }

    /// Convenience: factor scores and weighted total in one call.
    pub fn score(&self, crop: &CropProfile, query: &RecommendationQuery) -> (FactorScores, f64) {
        let factors = self.factor_scores(crop, query);
        let total = self.total_score(&factors);
        (factors, total)
    }
}

/// Band fit with the neutral fallback for crops lacking a recorded band.
fn band_fit(band: Option<ToleranceBand>, value: f64) -> f64 {
    match band {
        Some(band) => band.fit(value),
        None => NEUTRAL_BAND_FIT,
    }
}
