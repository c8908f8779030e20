//! Crop Suitability Recommendation Engine
//!
//! Scores candidate crop profiles against a soil/district/temperature/rainfall
//! query, filters out low-confidence matches, and returns a ranked, bounded
//! list of recommendations.

mod engine;
mod scoring;
mod types;

pub use engine::RecommendationEngine;
pub use scoring::{ScoreCalculator, ScoringWeights};
pub use types::{FactorScores, ScoredCrop};

/// Default factor weights. The four weighted maxima sum to exactly 1.0.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    soil: 0.30,
    district: 0.20,
    temperature: 0.25,
    rainfall: 0.25,
};

/// Candidates scoring at or below this are dropped (open boundary: exactly
/// 0.3 is excluded).
pub const MIN_SUITABILITY_SCORE: f64 = 0.3;

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Band fit used when a crop has no recorded tolerance band for a factor.
pub const NEUTRAL_BAND_FIT: f64 = 0.5;
