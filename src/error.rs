use thiserror::Error;

/// A required environment variable was missing or held an unusable value.
///
/// The payload is the environment variable name the operator has to fix,
/// e.g. `KAFKA_SASL_JAAS_PASSWORD`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing configuration: please set the environment variable {0}")]
pub struct MissingConfigurationError(pub String);

impl MissingConfigurationError {
    pub fn new(variable: &str) -> Self {
        MissingConfigurationError(variable.to_string())
    }
}
