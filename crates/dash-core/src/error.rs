//! Errors raised while reading chart configuration.
//!
//! Rendering itself never fails: a bad configuration draws an empty or
//! partial chart. Only turning external JSON into overrides can error.

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {chart} configuration: {source}")]
    Json {
        chart: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{chart} configuration must be a JSON object, found {found}")]
    NotAnObject {
        chart: &'static str,
        found: &'static str,
    },
}
