//! Recommendation pipeline: score, filter, rank, truncate.

use crate::config::ScoringConfig;
use crate::domain::{CropProfile, RecommendationQuery};

use super::scoring::ScoreCalculator;
use super::types::ScoredCrop;
use super::{MAX_RECOMMENDATIONS, MIN_SUITABILITY_SCORE};

/// Ranks candidate crop profiles against a query.
///
/// A synchronous, side-effect-free function of its inputs: concurrent
/// invocations share nothing and need no synchronization.
#[derive(Clone, Copy, Debug)]
pub struct RecommendationEngine {
    calculator: ScoreCalculator,
    min_score: f64,
    max_results: usize,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            calculator: ScoreCalculator::new(),
            min_score: MIN_SUITABILITY_SCORE,
            max_results: MAX_RECOMMENDATIONS,
        }
    }

    pub fn with_config(config: &ScoringConfig) -> Self {
        Self {
            calculator: ScoreCalculator::with_weights(config.weights),
            min_score: config.min_score,
            max_results: config.max_results,
        }
    }

    /// Score every candidate, drop those at or below the threshold, rank the
    /// rest by descending suitability, and return at most the configured
    /// number of results.
    ///
    /// Candidates with equal scores keep their input order (`sort_by` is
    /// stable), so identical calls always produce identical output.
    pub fn recommend(
        &self,
        query: &RecommendationQuery,
        candidates: &[CropProfile],
    ) -> Vec<ScoredCrop> {
        let mut scored: Vec<ScoredCrop> = candidates
            .iter()
            .map(|crop| self.score_candidate(crop, query))
            .filter(|scored| scored.suitability_score > self.min_score)
            .collect();

        scored.sort_by(|a, b| b.suitability_score.total_cmp(&a.suitability_score));
        scored.truncate(self.max_results);
        scored
    }

    fn score_candidate(&self, crop: &CropProfile, query: &RecommendationQuery) -> ScoredCrop {
        let (factor_scores, suitability_score) = self.calculator.score(crop, query);
        ScoredCrop {
            profile: crop.clone(),
            suitability_score,
            match_percentage: (suitability_score * 100.0).round() as u8,
            factor_scores,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CropId, CropStatus, SoilType};

    fn crop(name: &str, soils: &[SoilType], districts: &[&str]) -> CropProfile {
        CropProfile {
            id: CropId(format!("crop_{}", name.to_ascii_lowercase())),
            name: name.to_owned(),
            scientific_name: None,
            image: None,
            soil_types: soils.to_vec(),
            districts: districts.iter().map(|d| (*d).to_owned()).collect(),
            min_temperature: Some(20.0),
            max_temperature: Some(30.0),
            min_rainfall: Some(600.0),
            max_rainfall: Some(900.0),
            water_needs: None,
            season: None,
            duration: None,
            fertilizers: Vec::new(),
            expected_yield: None,
            description: None,
            status: CropStatus::Active,
        }
    }

    fn query(temperature: f64, rainfall: f64) -> RecommendationQuery {
        RecommendationQuery::new(SoilType::Black, "Belagavi", temperature, rainfall).unwrap()
    }

    #[test]
    fn full_match_scores_one_hundred_percent() {
        let engine = RecommendationEngine::new();
        let candidates = vec![crop("Cotton", &[SoilType::Black], &["Belagavi"])];

        let results = engine.recommend(&query(25.0, 750.0), &candidates);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].suitability_score, 1.0);
        assert_eq!(results[0].match_percentage, 100);
    }

    #[test]
    fn out_of_band_temperature_scores_seventy_five() {
        let engine = RecommendationEngine::new();
        let candidates = vec![crop("Cotton", &[SoilType::Black], &["Belagavi"])];

        // deviation 10 equals the band width: temperature factor drops to 0
        let results = engine.recommend(&query(35.0, 750.0), &candidates);
        assert_eq!(results.len(), 1);
        assert!((results[0].suitability_score - 0.75).abs() < 1e-12);
        assert_eq!(results[0].match_percentage, 75);
    }

    #[test]
    fn bandless_mismatch_falls_below_threshold() {
        let engine = RecommendationEngine::new();
        let mut stranger = crop("Coffee", &[SoilType::Laterite], &["Kodagu"]);
        stranger.min_temperature = None;
        stranger.max_temperature = None;
        stranger.min_rainfall = None;
        stranger.max_rainfall = None;

        // 0 + 0 + 0.125 + 0.125 = 0.25 ≤ 0.3
        let results = engine.recommend(&query(25.0, 750.0), &[stranger]);
        assert!(results.is_empty());
    }

    #[test]
    fn threshold_boundary_is_open() {
        // soil 1.0 only: exactly the 0.3 threshold, must be excluded
        let mut boundary = crop("Boundary", &[SoilType::Black], &["Dharwad"]);
        boundary.min_temperature = Some(0.0);
        boundary.max_temperature = Some(10.0);
        boundary.min_rainfall = Some(0.0);
        boundary.max_rainfall = Some(100.0);

        let engine = RecommendationEngine::new();
        // temperature 15 deviates 10 over width 10, rainfall 850 deviates 800
        // over width 100: both band fits are 0
        let results = engine.recommend(&query(15.0, 850.0), &[boundary]);
        assert!(results.is_empty());
    }

    #[test]
    fn empty_candidate_list_yields_empty_output() {
        let engine = RecommendationEngine::new();
        assert!(engine.recommend(&query(25.0, 750.0), &[]).is_empty());
    }

    #[test]
    fn output_is_capped_and_sorted_descending() {
        let engine = RecommendationEngine::new();
        let mut candidates = Vec::new();
        for i in 0..10 {
            let mut c = crop(&format!("Crop{i}"), &[SoilType::Black], &["Belagavi"]);
            // spread the temperature midpoints so scores differ
            c.min_temperature = Some(20.0 + i as f64);
            c.max_temperature = Some(30.0 + i as f64);
            candidates.push(c);
        }

        let results = engine.recommend(&query(25.0, 750.0), &candidates);
        assert_eq!(results.len(), 6);
        for pair in results.windows(2) {
            assert!(pair[0].suitability_score >= pair[1].suitability_score);
        }
        // all survivors are strictly above the threshold
        assert!(results.iter().all(|r| r.suitability_score > MIN_SUITABILITY_SCORE));
    }

    #[test]
    fn ties_keep_candidate_input_order() {
        let engine = RecommendationEngine::new();
        let candidates = vec![
            crop("First", &[SoilType::Black], &["Belagavi"]),
            crop("Second", &[SoilType::Black], &["Belagavi"]),
            crop("Third", &[SoilType::Black], &["Belagavi"]),
        ];

        let results = engine.recommend(&query(25.0, 750.0), &candidates);
        let names: Vec<&str> = results.iter().map(|r| r.profile.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn identical_calls_yield_identical_output() {
        let engine = RecommendationEngine::new();
        let candidates = vec![
            crop("A", &[SoilType::Black], &["Belagavi"]),
            crop("B", &[SoilType::Black], &["Belagavi"]),
            crop("C", &[SoilType::Black], &["Dharwad"]),
        ];
        let q = query(27.0, 800.0);

        assert_eq!(engine.recommend(&q, &candidates), engine.recommend(&q, &candidates));
    }

    #[test]
    fn candidates_are_not_mutated() {
        let engine = RecommendationEngine::new();
        let candidates = vec![crop("Cotton", &[SoilType::Black], &["Belagavi"])];
        let before = candidates.clone();
        let _ = engine.recommend(&query(25.0, 750.0), &candidates);
        assert_eq!(candidates, before);
    }

    #[test]
    fn scores_stay_within_unit_interval() {
        let engine = RecommendationEngine::new();
        let mut candidates = Vec::new();
        for (i, soil) in SoilType::ALL.iter().enumerate() {
            let mut c = crop(&format!("Crop{i}"), &[*soil], &["Belagavi", "Mysore"]);
            c.min_temperature = Some(-5.0 + i as f64 * 7.0);
            c.max_temperature = Some(15.0 + i as f64 * 7.0);
            c.min_rainfall = Some(100.0 * i as f64);
            c.max_rainfall = Some(100.0 * i as f64 + 400.0);
            candidates.push(c);
        }

        for q in [query(-10.0, 0.0), query(22.0, 640.0), query(48.0, 4000.0)] {
            for result in engine.recommend(&q, &candidates) {
                assert!(result.suitability_score >= 0.0);
                assert!(result.suitability_score <= 1.0);
                assert!(result.match_percentage <= 100);
            }
        }
    }

    #[test]
    fn zero_width_band_requires_exact_hit() {
        let mut point = crop("Point", &[SoilType::Black], &["Belagavi"]);
        point.min_temperature = Some(25.0);
        point.max_temperature = Some(25.0);

        let engine = RecommendationEngine::new();
        let exact = engine.recommend(&query(25.0, 750.0), &[point.clone()]);
        assert_eq!(exact[0].suitability_score, 1.0);

        let near = engine.recommend(&query(25.5, 750.0), &[point]);
        assert_eq!(near[0].factor_scores.temperature, 0.0);
        assert!((near[0].suitability_score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn config_overrides_threshold_and_cap() {
        let config = ScoringConfig { max_results: 2, ..ScoringConfig::default() };
        let engine = RecommendationEngine::with_config(&config);
        let candidates = vec![
            crop("A", &[SoilType::Black], &["Belagavi"]),
            crop("B", &[SoilType::Black], &["Belagavi"]),
            crop("C", &[SoilType::Black], &["Belagavi"]),
        ];

        assert_eq!(engine.recommend(&query(25.0, 750.0), &candidates).len(), 2);
    }
}
