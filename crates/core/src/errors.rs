use thiserror::Error;

/// Validation failures at the query boundary. These are raised before the
/// scoring engine runs; the engine itself has no failure modes.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("missing required parameter `{parameter}`")]
    MissingParameter { parameter: &'static str },
    #[error("parameter `{parameter}` is not a number: `{value}`")]
    InvalidNumber { parameter: &'static str, value: String },
    #[error("parameter `{parameter}` must be a finite number")]
    NonFiniteValue { parameter: &'static str },
    #[error("unknown soil type `{0}`")]
    UnknownSoilType(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("catalog failure: {0}")]
    Catalog(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable label for interface envelopes.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(_) => "invalid_parameters",
            Self::Catalog(_) => "catalog_unavailable",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) => {
                "Please provide all parameters: soilType, district, temperature, rainfall."
            }
            Self::Catalog(_) => "The crop catalog could not be loaded.",
            Self::Configuration(_) => "The scoring configuration is invalid.",
        }
    }
}

impl From<crate::catalog::CatalogError> for ApplicationError {
    fn from(value: crate::catalog::CatalogError) -> Self {
        Self::Catalog(value.to_string())
    }
}

impl From<crate::config::ConfigError> for ApplicationError {
    fn from(value: crate::config::ConfigError) -> Self {
        Self::Configuration(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_invalid_parameters_class() {
        let app = ApplicationError::from(DomainError::MissingParameter { parameter: "rainfall" });
        assert_eq!(app.error_class(), "invalid_parameters");
        assert_eq!(
            app.user_message(),
            "Please provide all parameters: soilType, district, temperature, rainfall."
        );
    }

    #[test]
    fn catalog_errors_map_to_catalog_class() {
        let app = ApplicationError::Catalog("no such file".to_owned());
        assert_eq!(app.error_class(), "catalog_unavailable");
    }
}
