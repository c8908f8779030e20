pub mod crop;
pub mod query;

pub use crop::{CropId, CropProfile, CropStatus, Season, SoilType, ToleranceBand, WaterNeeds};
pub use query::{RawQueryParams, RecommendationQuery};
