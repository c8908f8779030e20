//! Scoring configuration: named constants with optional file/env tuning.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::recommend::{
    ScoringWeights, DEFAULT_WEIGHTS, MAX_RECOMMENDATIONS, MIN_SUITABILITY_SCORE,
};

/// Environment variable naming a TOML config file.
pub const CONFIG_PATH_ENV: &str = "AGROADVISOR_CONFIG";
/// Environment override for the suitability threshold.
pub const MIN_SCORE_ENV: &str = "AGROADVISOR_MIN_SCORE";
/// Environment override for the result cap.
pub const MAX_RESULTS_ENV: &str = "AGROADVISOR_MAX_RESULTS";

/// Tunable parameters of the recommendation engine.
///
/// Defaults are the published algorithm constants; a TOML file and a pair of
/// environment variables may patch them, and the merged result is validated
/// before use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// Open lower bound: results must score strictly above this.
    pub min_score: f64,
    pub max_results: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            min_score: MIN_SUITABILITY_SCORE,
            max_results: MAX_RECOMMENDATIONS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    scoring: Option<ScoringPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScoringPatch {
    weights: Option<WeightsPatch>,
    min_score: Option<f64>,
    max_results: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct WeightsPatch {
    soil: Option<f64>,
    district: Option<f64>,
    temperature: Option<f64>,
    rainfall: Option<f64>,
}

impl ScoringConfig {
    /// Load the effective configuration.
    ///
    /// Precedence, lowest to highest: built-in defaults, TOML file (explicit
    /// `path` argument, else the `AGROADVISOR_CONFIG` variable), individual
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = resolve_config_path(path) {
            let patch = read_patch(&path)?;
            config.apply(patch);
        }
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, patch: ConfigPatch) {
        let Some(scoring) = patch.scoring else { return };
        if let Some(weights) = scoring.weights {
            if let Some(soil) = weights.soil {
                self.weights.soil = soil;
            }
            if let Some(district) = weights.district {
                self.weights.district = district;
            }
            if let Some(temperature) = weights.temperature {
                self.weights.temperature = temperature;
            }
            if let Some(rainfall) = weights.rainfall {
                self.weights.rainfall = rainfall;
            }
        }
        if let Some(min_score) = scoring.min_score {
            self.min_score = min_score;
        }
        if let Some(max_results) = scoring.max_results {
            self.max_results = max_results;
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(raw) = env_value(MIN_SCORE_ENV) {
            self.min_score = raw.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: MIN_SCORE_ENV.to_owned(),
                value: raw,
            })?;
        }
        if let Some(raw) = env_value(MAX_RESULTS_ENV) {
            self.max_results = raw.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: MAX_RESULTS_ENV.to_owned(),
                value: raw,
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("soil", self.weights.soil),
            ("district", self.weights.district),
            ("temperature", self.weights.temperature),
            ("rainfall", self.weights.rainfall),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::Validation(format!(
                    "weight `{name}` must be within [0, 1], got {weight}"
                )));
            }
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::Validation(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        if !self.min_score.is_finite() || !(0.0..1.0).contains(&self.min_score) {
            return Err(ConfigError::Validation(format!(
                "min_score must be within [0, 1), got {}",
                self.min_score
            )));
        }
        if self.max_results == 0 {
            return Err(ConfigError::Validation(
                "max_results must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env_value(CONFIG_PATH_ENV).map(PathBuf::from)
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    toml::from_str(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}
