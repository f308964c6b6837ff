//! Errors surfaced by the runner binary.

use thiserror::Error;

use iarc_core::config::ConfigError;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("tick duration must be positive and finite, got {0}")]
    InvalidDt(f64),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
    #[error("game loop thread panicked")]
    LoopPanicked,
}
