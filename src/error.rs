use std::path::PathBuf;

/// Errors produced by a call to the grid-world service.
///
/// [`ApiError::Application`] is the service saying no; every other variant is
/// a transport failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service responded with HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("{0}")]
    Application(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Application(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        ApiError::Malformed(value.to_string())
    }
}

/// Actions refused locally, before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("initialize an environment before training")]
    NotInitialized,

    #[error("training is already in progress")]
    TrainingInProgress,

    #[error("train the agent at least once before evaluating")]
    NotTrained,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
