//! The `config` command: show the effective scoring configuration with
//! source attribution.

use std::env;
use std::path::Path;

use agroadvisor_core::config::{CONFIG_PATH_ENV, MAX_RESULTS_ENV, MIN_SCORE_ENV};
use agroadvisor_core::{ApplicationError, ScoringConfig, ScoringWeights};
use serde::Serialize;

use super::{serialize_success, CommandResult};

#[derive(Debug, Serialize)]
struct ConfigResponse {
    config_file: Option<String>,
    env_overrides: Vec<EnvOverride>,
    scoring: ScoringView,
}

#[derive(Debug, Serialize)]
struct EnvOverride {
    key: &'static str,
    value: String,
}

#[derive(Debug, Serialize)]
struct ScoringView {
    weights: ScoringWeights,
    min_score: f64,
    max_results: usize,
}

pub fn run(config_path: Option<&Path>) -> CommandResult {
    let config = match ScoringConfig::load(config_path) {
        Ok(config) => config,
        Err(error) => return CommandResult::from_error("config", &ApplicationError::from(error)),
    };

    let config_file = config_path
        .map(|path| path.display().to_string())
        .or_else(|| env::var(CONFIG_PATH_ENV).ok().filter(|v| !v.trim().is_empty()));

    let env_overrides = [MIN_SCORE_ENV, MAX_RESULTS_ENV]
        .into_iter()
        .filter_map(|key| {
            env::var(key)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(|value| EnvOverride { key, value })
        })
        .collect();

    let response = ConfigResponse {
        config_file,
        env_overrides,
        scoring: ScoringView {
            weights: config.weights,
            min_score: config.min_score,
            max_results: config.max_results,
        },
    };
    serialize_success("config", &response)
}
