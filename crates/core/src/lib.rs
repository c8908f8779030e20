pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod recommend;
pub mod regions;

pub use catalog::{CatalogError, CropCatalog};
pub use config::{ConfigError, ScoringConfig};
pub use domain::{
    CropId, CropProfile, CropStatus, RawQueryParams, RecommendationQuery, Season, SoilType,
    ToleranceBand, WaterNeeds,
};
pub use errors::{ApplicationError, DomainError};
pub use recommend::{
    FactorScores, RecommendationEngine, ScoreCalculator, ScoredCrop, ScoringWeights,
};
