//! Error types for launchkit actions

use thiserror::Error;

/// Core error type for launchkit operations
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Anything that failed below the application layer: DNS, connect,
    /// timeout, malformed URL, non-2xx status.
    ///
    /// Displays the bare reason so the boundary can prefix it with `Error: `.
    #[error("{0}")]
    Transport(String),

    /// The response body was not valid UTF-8 JSON text
    #[error("Invalid JSON response")]
    InvalidJson(#[source] serde_json::Error),

    /// The system clipboard could not be read or written
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Invalid runtime configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A decoded value could not be rendered back to text
    #[error("Render error: {0}")]
    Render(String),
}

impl LaunchError {
    /// Whether this error belongs to the fetch action's reported taxonomy
    /// (transport or decode failure).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, LaunchError::Transport(_) | LaunchError::InvalidJson(_))
    }
}

/// Result type alias for launchkit operations
pub type Result<T> = std::result::Result<T, LaunchError>;
