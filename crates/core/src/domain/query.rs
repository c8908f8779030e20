//! Query types and the caller-side parameter parsing boundary.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

use super::crop::SoilType;

/// The validated soil/district/temperature/rainfall parameters a caller
/// submits for recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationQuery {
    pub soil_type: SoilType,
    pub district: String,
    /// Current or expected ambient temperature in °C.
    pub temperature: f64,
    /// Expected rainfall in millimeters.
    pub rainfall: f64,
}

impl RecommendationQuery {
    /// Build a query, rejecting non-finite numeric values up front so the
    /// scoring engine never sees NaN or infinity.
    pub fn new(
        soil_type: SoilType,
        district: impl Into<String>,
        temperature: f64,
        rainfall: f64,
    ) -> Result<Self, DomainError> {
        if !temperature.is_finite() {
            return Err(DomainError::NonFiniteValue { parameter: "temperature" });
        }
        if !rainfall.is_finite() {
            return Err(DomainError::NonFiniteValue { parameter: "rainfall" });
        }
        let district = district.into();
        if district.trim().is_empty() {
            return Err(DomainError::MissingParameter { parameter: "district" });
        }
        Ok(Self { soil_type, district, temperature, rainfall })
    }
}

/// Untyped request parameters exactly as they arrive at the boundary.
///
/// The engine contract assumes well-formed numeric input; this is where raw
/// strings get rejected before the engine is ever invoked.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawQueryParams {
    pub soil_type: Option<String>,
    pub district: Option<String>,
    pub temperature: Option<String>,
    pub rainfall: Option<String>,
}

impl RawQueryParams {
    pub fn parse(&self) -> Result<RecommendationQuery, DomainError> {
        let soil = require(self.soil_type.as_deref(), "soilType")?;
        let district = require(self.district.as_deref(), "district")?;
        let temperature = parse_number(require(self.temperature.as_deref(), "temperature")?, "temperature")?;
        let rainfall = parse_number(require(self.rainfall.as_deref(), "rainfall")?, "rainfall")?;

        let soil_type: SoilType = soil.parse()?;
        RecommendationQuery::new(soil_type, district, temperature, rainfall)
    }
}

fn require<'a>(value: Option<&'a str>, parameter: &'static str) -> Result<&'a str, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::MissingParameter { parameter }),
    }
}

fn parse_number(raw: &str, parameter: &'static str) -> Result<f64, DomainError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidNumber { parameter, value: raw.to_owned() })?;
    if !value.is_finite() {
        return Err(DomainError::NonFiniteValue { parameter });
    }
    Ok(value)
}
