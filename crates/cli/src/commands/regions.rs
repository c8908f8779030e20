//! The `soils` and `districts` reference commands.

use agroadvisor_core::regions::{SoilProfile, DISTRICTS, SOIL_PROFILES};
use serde::Serialize;

use super::{serialize_success, CommandResult};

#[derive(Debug, Serialize)]
struct SoilsResponse {
    total_profiles: usize,
    soil_profiles: &'static [SoilProfile],
}

#[derive(Debug, Serialize)]
struct DistrictsResponse {
    total_districts: usize,
    districts: &'static [&'static str],
}

pub fn soils() -> CommandResult {
    let response =
        SoilsResponse { total_profiles: SOIL_PROFILES.len(), soil_profiles: SOIL_PROFILES };
    serialize_success("soils", &response)
}

pub fn districts() -> CommandResult {
    let response = DistrictsResponse { total_districts: DISTRICTS.len(), districts: DISTRICTS };
    serialize_success("districts", &response)
}
