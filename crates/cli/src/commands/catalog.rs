//! The `catalog` command: inspect and validate a crop catalog.

use std::path::Path;

use agroadvisor_core::{ApplicationError, CropCatalog, CropProfile};
use serde::Serialize;

use super::{serialize_success, CommandResult};

#[derive(Debug, Serialize)]
struct CatalogResponse<'a> {
    source: &'a str,
    total_crops: usize,
    active_crops: usize,
    crops: &'a [CropProfile],
}

pub fn run(catalog_path: Option<&Path>) -> CommandResult {
    let (catalog, source) = match catalog_path {
        Some(path) => match CropCatalog::from_json_path(path) {
            Ok(catalog) => (catalog, path.display().to_string()),
            Err(error) => {
                return CommandResult::from_error("catalog", &ApplicationError::from(error))
            }
        },
        None => (CropCatalog::builtin(), "builtin".to_owned()),
    };

    let response = CatalogResponse {
        source: &source,
        total_crops: catalog.len(),
        active_crops: catalog.active().len(),
        crops: catalog.crops(),
    };
    serialize_success("catalog", &response)
}
