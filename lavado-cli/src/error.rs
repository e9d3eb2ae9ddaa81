//! CLI error type.

use std::path::PathBuf;

use lavado_lib::error::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid setting `{key}`: {message}")]
    InvalidSetting { key: &'static str, message: String },
    #[error("{0}")]
    Args(String),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl CliError {
    pub fn args(message: impl Into<String>) -> Self {
        CliError::Args(message.into())
    }
}
