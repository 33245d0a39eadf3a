//! Error types for the demo session

use exo_dataset::LoadError;
use exo_form::FormError;
use std::path::PathBuf;

/// A session handler could not run
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Datasets have not arrived yet
    #[error("session is still loading")]
    NotReady,

    /// Loading failed earlier; the session is no longer interactive
    #[error("session unavailable after load failure: {0}")]
    LoadFailed(String),

    /// Datasets are loaded once per session
    #[error("datasets already loaded")]
    AlreadyLoaded,

    /// Loading failed now; the session has moved to the load-error state
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Edit or snapshot referenced a bad field
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Configuration could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file unreadable
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`DemoConfig`](crate::DemoConfig)
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Values out of range
    #[error("invalid config values: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
