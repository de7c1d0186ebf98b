use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read config input: {0}")]
    Input(#[source] std::io::Error),

    #[error("circular reference detected at variable '{0}'")]
    CircularReference(String),
}
