//! Crop profile model and its tolerance bands.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropId(pub String);

/// Soil categories recognized by the advisory data set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    #[serde(rename = "Red Soil")]
    Red,
    #[serde(rename = "Black Soil")]
    Black,
    #[serde(rename = "Alluvial Soil")]
    Alluvial,
    #[serde(rename = "Laterite Soil")]
    Laterite,
    #[serde(rename = "Sandy Soil")]
    Sandy,
    #[serde(rename = "Clay Soil")]
    Clay,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "Red Soil",
            Self::Black => "Black Soil",
            Self::Alluvial => "Alluvial Soil",
            Self::Laterite => "Laterite Soil",
            Self::Sandy => "Sandy Soil",
            Self::Clay => "Clay Soil",
        }
    }

    pub const ALL: [SoilType; 6] = [
        Self::Red,
        Self::Black,
        Self::Alluvial,
        Self::Laterite,
        Self::Sandy,
        Self::Clay,
    ];
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SoilType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Red Soil" => Ok(Self::Red),
            "Black Soil" => Ok(Self::Black),
            "Alluvial Soil" => Ok(Self::Alluvial),
            "Laterite Soil" => Ok(Self::Laterite),
            "Sandy Soil" => Ok(Self::Sandy),
            "Clay Soil" => Ok(Self::Clay),
            other => Err(DomainError::UnknownSoilType(other.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterNeeds {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Summer,
    #[serde(rename = "All Season")]
    AllSeason,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    #[default]
    Active,
    Inactive,
}

/// A tolerated numeric range (temperature in °C or rainfall in mm) with a
/// linear falloff in fit away from its midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToleranceBand {
    pub min: f64,
    pub max: f64,
}

impl ToleranceBand {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Fit of `value` against this band in [0, 1].
    ///
    /// 1.0 at the midpoint, decaying linearly to 0.0 at a deviation equal to
    /// the full band width. A query landing exactly on `min` or `max` scores
    /// 0.5: the stated bounds are not full-confidence edges, only the
    /// midpoint is. A zero-width band is an exact-match point: 1.0 when the
    /// value equals it, 0.0 otherwise.
    pub fn fit(&self, value: f64) -> f64 {
        let width = self.width();
        if width == 0.0 {
            return if value == self.min { 1.0 } else { 0.0 };
        }
        let deviation = (value - self.midpoint()).abs();
        (1.0 - deviation / width).max(0.0)
    }
}

/// A crop profile record eligible for scoring against a user query.
///
/// Identity and descriptive fields are an opaque payload as far as scoring is
/// concerned; the engine reads only the soil, district, and band fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub id: CropId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub soil_types: Vec<SoilType>,
    pub districts: Vec<String>,
    #[serde(default)]
    pub min_temperature: Option<f64>,
    #[serde(default)]
    pub max_temperature: Option<f64>,
    #[serde(default)]
    pub min_rainfall: Option<f64>,
    #[serde(default)]
    pub max_rainfall: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_needs: Option<WaterNeeds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    /// Crop duration, e.g. "120-150 days".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub fertilizers: Vec<String>,
    #[serde(default, rename = "yield", skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: CropStatus,
}

impl CropProfile {
    pub fn is_active(&self) -> bool {
        self.status == CropStatus::Active
    }

    /// Temperature band, present only when both bounds are recorded.
    pub fn temperature_band(&self) -> Option<ToleranceBand> {
        match (self.min_temperature, self.max_temperature) {
            (Some(min), Some(max)) => Some(ToleranceBand { min, max }),
            _ => None,
        }
    }

    /// Rainfall band, present only when both bounds are recorded.
    pub fn rainfall_band(&self) -> Option<ToleranceBand> {
        match (self.min_rainfall, self.max_rainfall) {
            (Some(min), Some(max)) => Some(ToleranceBand { min, max }),
            _ => None,
        }
    }

    pub fn tolerates_soil(&self, soil: SoilType) -> bool {
        self.soil_types.contains(&soil)
    }

    pub fn grows_in_district(&self, district: &str) -> bool {
        self.districts.iter().any(|d| d == district)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(min: f64, max: f64) -> ToleranceBand {
        ToleranceBand { min, max }
    }

    #[test]
    fn band_fit_is_one_at_midpoint() {
        assert_eq!(band(10.0, 30.0).fit(20.0), 1.0);
    }

    #[test]
    fn band_fit_is_half_at_stated_bounds() {
        let b = band(10.0, 30.0);
        assert_eq!(b.fit(10.0), 0.5);
        assert_eq!(b.fit(30.0), 0.5);
    }

    #[test]
    fn band_fit_reaches_zero_at_full_width_deviation() {
        let b = band(20.0, 30.0);
        // midpoint 25, width 10: zero fit at 15 and 35, clamped beyond
        assert_eq!(b.fit(35.0), 0.0);
        assert_eq!(b.fit(15.0), 0.0);
        assert_eq!(b.fit(40.0), 0.0);
    }

    #[test]
    fn zero_width_band_is_exact_match_point() {
        let b = band(25.0, 25.0);
        assert_eq!(b.fit(25.0), 1.0);
        assert_eq!(b.fit(25.000001), 0.0);
    }

    #[test]
    fn band_requires_both_bounds() {
        let mut crop = sample_crop();
        crop.min_temperature = Some(18.0);
        crop.max_temperature = None;
        assert!(crop.temperature_band().is_none());

        crop.max_temperature = Some(32.0);
        assert_eq!(crop.temperature_band(), Some(band(18.0, 32.0)));
    }

    #[test]
    fn zero_bound_still_forms_a_band() {
        let mut crop = sample_crop();
        crop.min_temperature = Some(0.0);
        crop.max_temperature = Some(20.0);
        assert_eq!(crop.temperature_band(), Some(band(0.0, 20.0)));
    }

    #[test]
    fn soil_type_round_trips_through_wire_names() {
        for soil in SoilType::ALL {
            let parsed: SoilType = soil.as_str().parse().unwrap();
            assert_eq!(parsed, soil);
        }
        assert!("Loamy Soil".parse::<SoilType>().is_err());
    }

    #[test]
    fn profile_serializes_yield_under_original_key() {
        let mut crop = sample_crop();
        crop.expected_yield = Some("20-25 quintals/acre".to_owned());
        let json = serde_json::to_value(&crop).unwrap();
        assert_eq!(json["yield"], "20-25 quintals/acre");
        assert_eq!(json["status"], "active");
        assert_eq!(json["soil_types"][0], "Red Soil");
    }

    fn sample_crop() -> CropProfile {
        CropProfile {
            id: CropId("crop_ragi".to_owned()),
            name: "Ragi".to_owned(),
            scientific_name: None,
            image: None,
            soil_types: vec![SoilType::Red],
            districts: vec!["Kolar".to_owned()],
            min_temperature: None,
            max_temperature: None,
            min_rainfall: None,
            max_rainfall: None,
            water_needs: None,
            season: None,
            duration: None,
            fertilizers: Vec::new(),
            expected_yield: None,
            description: None,
            status: CropStatus::Active,
        }
    }
}
