//! The `recommend` command: the request-handling collaborator around the
//! scoring engine.

use std::path::Path;

use agroadvisor_core::{
    ApplicationError, CropCatalog, RawQueryParams, RecommendationEngine, RecommendationQuery,
    ScoredCrop, ScoringConfig,
};
use agroadvisor_core::regions;
use serde::Serialize;
use tracing::{info, warn};

use super::{serialize_success, CommandResult};

/// Response envelope mirroring the advisory API shape.
#[derive(Debug, Serialize)]
struct RecommendResponse<'a> {
    success: bool,
    recommendations: &'a [ScoredCrop],
    parameters: &'a RecommendationQuery,
    total_recommendations: usize,
}

pub fn run(
    params: &RawQueryParams,
    catalog_path: Option<&Path>,
    config_path: Option<&Path>,
) -> CommandResult {
    // Raw strings are validated here; the engine only ever sees a well-formed
    // query.
    let query = match params.parse() {
        Ok(query) => query,
        Err(error) => {
            return CommandResult::from_error("recommend", &ApplicationError::from(error))
        }
    };
    let config = match ScoringConfig::load(config_path) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::from_error("recommend", &ApplicationError::from(error))
        }
    };
    let catalog = match catalog_path {
        Some(path) => match CropCatalog::from_json_path(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                return CommandResult::from_error("recommend", &ApplicationError::from(error))
            }
        },
        None => CropCatalog::builtin(),
    };

    // Districts are open-ended in crop profiles, so an unknown name is not
    // rejected, only flagged.
    if !regions::is_known_district(&query.district) {
        warn!(
            event_name = "recommend.unknown_district",
            district = %query.district,
            "district is not in the reference list"
        );
    }

    let candidates = catalog.active();
    info!(
        event_name = "recommend.start",
        soil_type = %query.soil_type,
        district = %query.district,
        candidates = candidates.len(),
        "scoring candidate crops"
    );

    let engine = RecommendationEngine::with_config(&config);
    let recommendations = engine.recommend(&query, &candidates);
    info!(
        event_name = "recommend.complete",
        returned = recommendations.len(),
        "recommendation ranking complete"
    );

    let response = RecommendResponse {
        success: true,
        recommendations: &recommendations,
        parameters: &query,
        total_recommendations: recommendations.len(),
    };
    serialize_success("recommend", &response)
}
