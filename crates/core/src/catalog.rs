//! Crop catalog loading.
//!
//! The engine itself is storage-agnostic; this module is the candidate source
//! collaborator. Profiles come either from a JSON file or from the built-in
//! deterministic seed catalog.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{CropId, CropProfile, CropStatus, Season, SoilType, WaterNeeds};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
}

/// An owned collection of crop profiles.
#[derive(Clone, Debug, Default)]
pub struct CropCatalog {
    crops: Vec<CropProfile>,
}

impl CropCatalog {
    pub fn from_profiles(crops: Vec<CropProfile>) -> Self {
        Self { crops }
    }

    /// Load a catalog from a JSON array of crop profiles.
    pub fn from_json_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        let crops: Vec<CropProfile> = serde_json::from_str(&raw)
            .map_err(|source| CatalogError::ParseFile { path: path.to_path_buf(), source })?;
        Ok(Self { crops })
    }

    /// The built-in Karnataka seed catalog.
    pub fn builtin() -> Self {
        Self { crops: CROP_SEEDS.iter().map(CropSeed::to_profile).collect() }
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    /// Profiles eligible for recommendation. The active/inactive predicate
    /// lives here, outside the scoring engine.
    pub fn active(&self) -> Vec<CropProfile> {
        self.crops.iter().filter(|crop| crop.is_active()).cloned().collect()
    }
}

struct CropSeed {
    id: &'static str,
    name: &'static str,
    scientific_name: &'static str,
    soil_types: &'static [SoilType],
    districts: &'static [&'static str],
    temperature_c: Option<(f64, f64)>,
    rainfall_mm: Option<(f64, f64)>,
    water_needs: WaterNeeds,
    season: Season,
    duration: &'static str,
    fertilizers: &'static [&'static str],
    expected_yield: &'static str,
}

impl CropSeed {
    fn to_profile(&self) -> CropProfile {
        CropProfile {
            id: CropId(self.id.to_owned()),
            name: self.name.to_owned(),
            scientific_name: Some(self.scientific_name.to_owned()),
            image: None,
            soil_types: self.soil_types.to_vec(),
            districts: self.districts.iter().map(|d| (*d).to_owned()).collect(),
            min_temperature: self.temperature_c.map(|(min, _)| min),
            max_temperature: self.temperature_c.map(|(_, max)| max),
            min_rainfall: self.rainfall_mm.map(|(min, _)| min),
            max_rainfall: self.rainfall_mm.map(|(_, max)| max),
            water_needs: Some(self.water_needs),
            season: Some(self.season),
            duration: Some(self.duration.to_owned()),
            fertilizers: self.fertilizers.iter().map(|f| (*f).to_owned()).collect(),
            expected_yield: Some(self.expected_yield.to_owned()),
            description: None,
            status: CropStatus::Active,
        }
    }
}

const CROP_SEEDS: &[CropSeed] = &[
    CropSeed {
        id: "crop_ragi",
        name: "Ragi",
        scientific_name: "Eleusine coracana",
        soil_types: &[SoilType::Red],
        districts: &["Bangalore Rural", "Kolar", "Tumakuru", "Mandya", "Ramanagara"],
        temperature_c: Some((20.0, 32.0)),
        rainfall_mm: Some((500.0, 900.0)),
        water_needs: WaterNeeds::Low,
        season: Season::Kharif,
        duration: "110-130 days",
        fertilizers: &["FYM", "Urea", "SSP"],
        expected_yield: "10-12 quintals/acre",
    },
    CropSeed {
        id: "crop_groundnut",
        name: "Groundnut",
        scientific_name: "Arachis hypogaea",
        soil_types: &[SoilType::Red, SoilType::Sandy],
        districts: &["Kolar", "Chikkaballapur", "Tumakuru", "Raichur"],
        temperature_c: Some((20.0, 30.0)),
        rainfall_mm: Some((500.0, 750.0)),
        water_needs: WaterNeeds::Low,
        season: Season::Kharif,
        duration: "100-120 days",
        fertilizers: &["Gypsum", "SSP"],
        expected_yield: "8-10 quintals/acre",
    },
    CropSeed {
        id: "crop_cotton",
        name: "Cotton",
        scientific_name: "Gossypium hirsutum",
        soil_types: &[SoilType::Black],
        districts: &["Belagavi", "Dharwad", "Raichur", "Kalaburagi", "Haveri"],
        temperature_c: Some((20.0, 30.0)),
        rainfall_mm: Some((600.0, 900.0)),
        water_needs: WaterNeeds::Medium,
        season: Season::Kharif,
        duration: "150-180 days",
        fertilizers: &["Urea", "DAP", "MOP"],
        expected_yield: "6-8 quintals/acre",
    },
    CropSeed {
        id: "crop_sugarcane",
        name: "Sugarcane",
        scientific_name: "Saccharum officinarum",
        soil_types: &[SoilType::Black, SoilType::Alluvial],
        districts: &["Belagavi", "Bagalkot", "Mandya", "Vijayapura"],
        temperature_c: Some((20.0, 32.0)),
        rainfall_mm: Some((1000.0, 1500.0)),
        water_needs: WaterNeeds::High,
        season: Season::AllSeason,
        duration: "300-360 days",
        fertilizers: &["FYM", "Urea", "MOP"],
        expected_yield: "35-45 tonnes/acre",
    },
    CropSeed {
        id: "crop_jowar",
        name: "Jowar",
        scientific_name: "Sorghum bicolor",
        soil_types: &[SoilType::Black],
        districts: &["Vijayapura", "Kalaburagi", "Raichur", "Koppal", "Gadag"],
        temperature_c: Some((24.0, 32.0)),
        rainfall_mm: Some((400.0, 700.0)),
        water_needs: WaterNeeds::Low,
        season: Season::Rabi,
        duration: "110-130 days",
        fertilizers: &["Urea", "SSP"],
        expected_yield: "8-10 quintals/acre",
    },
    CropSeed {
        id: "crop_paddy",
        name: "Paddy",
        scientific_name: "Oryza sativa",
        soil_types: &[SoilType::Alluvial, SoilType::Clay],
        districts: &["Raichur", "Mandya", "Shivamogga", "Davanagere"],
        temperature_c: Some((22.0, 32.0)),
        rainfall_mm: Some((1000.0, 2000.0)),
        water_needs: WaterNeeds::High,
        season: Season::Kharif,
        duration: "120-150 days",
        fertilizers: &["Urea", "DAP", "Zinc sulphate"],
        expected_yield: "20-25 quintals/acre",
    },
    CropSeed {
        id: "crop_wheat",
        name: "Wheat",
        scientific_name: "Triticum aestivum",
        soil_types: &[SoilType::Black],
        districts: &["Dharwad", "Gadag", "Vijayapura", "Bidar"],
        temperature_c: Some((15.0, 25.0)),
        rainfall_mm: Some((400.0, 800.0)),
        water_needs: WaterNeeds::Medium,
        season: Season::Rabi,
        duration: "110-130 days",
        fertilizers: &["Urea", "DAP"],
        expected_yield: "12-15 quintals/acre",
    },
    CropSeed {
        id: "crop_sunflower",
        name: "Sunflower",
        scientific_name: "Helianthus annuus",
        soil_types: &[SoilType::Black],
        districts: &["Raichur", "Koppal", "Gadag", "Yadgir"],
        temperature_c: Some((20.0, 28.0)),
        rainfall_mm: Some((500.0, 750.0)),
        water_needs: WaterNeeds::Low,
        season: Season::Rabi,
        duration: "90-110 days",
        fertilizers: &["Urea", "SSP", "Boron"],
        expected_yield: "6-8 quintals/acre",
    },
    CropSeed {
        id: "crop_maize",
        name: "Maize",
        scientific_name: "Zea mays",
        soil_types: &[SoilType::Red, SoilType::Alluvial],
        districts: &["Davanagere", "Haveri", "Belagavi", "Chikkaballapur"],
        temperature_c: Some((21.0, 30.0)),
        rainfall_mm: Some((500.0, 800.0)),
        water_needs: WaterNeeds::Medium,
        season: Season::Kharif,
        duration: "100-120 days",
        fertilizers: &["Urea", "DAP", "MOP"],
        expected_yield: "20-25 quintals/acre",
    },
    CropSeed {
        id: "crop_red_gram",
        name: "Red Gram",
        scientific_name: "Cajanus cajan",
        soil_types: &[SoilType::Red, SoilType::Black],
        districts: &["Kalaburagi", "Bidar", "Yadgir", "Raichur"],
        temperature_c: Some((20.0, 30.0)),
        rainfall_mm: Some((600.0, 1000.0)),
        water_needs: WaterNeeds::Low,
        season: Season::Kharif,
        duration: "150-180 days",
        fertilizers: &["DAP", "Rhizobium culture"],
        expected_yield: "5-7 quintals/acre",
    },
    CropSeed {
        id: "crop_coffee",
        name: "Coffee",
        scientific_name: "Coffea arabica",
        soil_types: &[SoilType::Laterite],
        districts: &["Chikmagalur", "Kodagu", "Hassan"],
        temperature_c: Some((15.0, 28.0)),
        rainfall_mm: Some((1500.0, 2500.0)),
        water_needs: WaterNeeds::High,
        season: Season::AllSeason,
        duration: "Perennial",
        fertilizers: &["Compost", "NPK 17:17:17"],
        expected_yield: "3-4 quintals/acre",
    },
    // No recorded temperature tolerance; scores the neutral band fit.
    CropSeed {
        id: "crop_coconut",
        name: "Coconut",
        scientific_name: "Cocos nucifera",
        soil_types: &[SoilType::Laterite, SoilType::Sandy],
        districts: &["Dakshina Kannada", "Udupi", "Uttara Kannada", "Tumakuru"],
        temperature_c: None,
        rainfall_mm: Some((1000.0, 3000.0)),
        water_needs: WaterNeeds::High,
        season: Season::AllSeason,
        duration: "Perennial",
        fertilizers: &["FYM", "Urea", "MOP"],
        expected_yield: "8000-10000 nuts/acre",
    },
];
