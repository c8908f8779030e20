//! Output types of the recommendation engine.

use serde::{Deserialize, Serialize};

use crate::domain::CropProfile;

/// Individual sub-scores, each in [0, 1], before weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    /// 1.0 when the query soil is among the crop's tolerated soils.
    pub soil: f64,
    /// 1.0 when the query district is among the crop's known districts.
    pub district: f64,
    /// Temperature band fit, or the neutral default without a band.
    pub temperature: f64,
    /// Rainfall band fit, or the neutral default without a band.
    pub rainfall: f64,
}

/// A candidate crop together with its computed suitability.
///
/// Derived and ephemeral: the underlying profile is passed through unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredCrop {
    #[serde(flatten)]
    pub profile: CropProfile,
    /// Weighted suitability in [0, 1].
    pub suitability_score: f64,
    /// `round(suitability_score * 100)`, an integer in [0, 100].
    pub match_percentage: u8,
    pub factor_scores: FactorScores,
}
