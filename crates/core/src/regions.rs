//! Karnataka regional reference data: districts and dominant soil profiles.

use serde::Serialize;

use crate::domain::SoilType;

/// A dominant soil category with the districts it covers.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SoilProfile {
    pub soil_type: SoilType,
    pub districts: &'static [&'static str],
    pub characteristics: &'static str,
    /// Crops traditionally grown on this soil; advisory reference only, not
    /// an input to the scoring engine.
    pub suitable_crops: &'static [&'static str],
}

pub const SOIL_PROFILES: &[SoilProfile] = &[
    SoilProfile {
        soil_type: SoilType::Red,
        districts: &[
            "Bangalore Urban",
            "Bangalore Rural",
            "Kolar",
            "Tumakuru",
            "Chikkaballapur",
            "Ramanagara",
            "Mandya",
            "Mysore",
        ],
        characteristics: "Well-drained, rich in iron, low in nitrogen and phosphorus",
        suitable_crops: &["Ragi", "Groundnut", "Cotton", "Maize", "Red Gram"],
    },
    SoilProfile {
        soil_type: SoilType::Black,
        districts: &[
            "Belagavi",
            "Dharwad",
            "Gadag",
            "Bagalkot",
            "Vijayapura",
            "Kalaburagi",
            "Bidar",
            "Raichur",
            "Koppal",
            "Yadgir",
        ],
        characteristics: "Clayey, moisture retentive, rich in calcium and magnesium",
        suitable_crops: &["Cotton", "Sugarcane", "Wheat", "Jowar", "Sunflower", "Chilli"],
    },
    SoilProfile {
        soil_type: SoilType::Laterite,
        districts: &[
            "Dakshina Kannada",
            "Udupi",
            "Uttara Kannada",
            "Shivamogga",
            "Chikmagalur",
            "Kodagu",
        ],
        characteristics: "Acidic, rich in iron and aluminum, well-drained",
        suitable_crops: &["Cashew", "Rubber", "Coffee", "Tea", "Coconut", "Areca nut"],
    },
    SoilProfile {
        soil_type: SoilType::Alluvial,
        districts: &["Raichur", "Kalaburagi", "Yadgir", "Vijayapura", "Bagalkot"],
        characteristics: "Fertile, rich in potash and lime, good for irrigation",
        suitable_crops: &["Paddy", "Sugarcane", "Wheat", "Tobacco", "Banana"],
    },
];

pub const DISTRICTS: &[&str] = &[
    "Bagalkot",
    "Bangalore Rural",
    "Bangalore Urban",
    "Belagavi",
    "Bellary",
    "Bidar",
    "Chamarajanagar",
    "Chikkaballapur",
    "Chikmagalur",
    "Dakshina Kannada",
    "Davanagere",
    "Dharwad",
    "Gadag",
    "Hassan",
    "Haveri",
    "Kalaburagi",
    "Kodagu",
    "Kolar",
    "Koppal",
    "Mandya",
    "Mysore",
    "Raichur",
    "Ramanagara",
    "Shivamogga",
    "Tumakuru",
    "Udupi",
    "Uttara Kannada",
    "Vijayanagara",
    "Vijayapura",
    "Yadgir",
];

pub fn is_known_district(name: &str) -> bool {
    DISTRICTS.contains(&name)
}

/// Dominant soil categories recorded for a district.
pub fn soil_types_for_district(name: &str) -> Vec<SoilType> {
    SOIL_PROFILES
        .iter()
        .filter(|profile| profile.districts.contains(&name))
        .map(|profile| profile.soil_type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_list_is_sorted_and_unique() {
        let mut sorted = DISTRICTS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, DISTRICTS);
    }

    #[test]
    fn soil_profile_districts_are_known() {
        for profile in SOIL_PROFILES {
            for district in profile.districts {
                assert!(is_known_district(district), "{district}");
            }
        }
    }

    #[test]
    fn raichur_carries_black_and_alluvial_soil() {
        let soils = soil_types_for_district("Raichur");
        assert_eq!(soils, vec![SoilType::Black, SoilType::Alluvial]);
    }

    #[test]
    fn unknown_district_has_no_soil_profiles() {
        assert!(!is_known_district("Atlantis"));
        assert!(soil_types_for_district("Atlantis").is_empty());
    }
}
