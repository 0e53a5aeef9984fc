//! CLI error types.

use sidenav_config::ConfigError;
use sidenav_tree::TreeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize sidebar: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
