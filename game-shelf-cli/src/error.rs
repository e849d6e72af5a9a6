use thiserror::Error;

use game_shelf_client::ClientError;
use game_shelf_core::CoreError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Backend request or configuration failed
    #[error("{0}")]
    Client(#[from] ClientError),

    /// Invalid filter value or job transition
    #[error("{0}")]
    Core(#[from] CoreError),

    /// No game with the requested id
    #[error("No game with id {0} in the library")]
    NotFound(i64),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
