//! Error kinds raised by theme application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for theming operations.
pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("No theme folder found for {name}")]
    ThemeNotFound { name: String },

    /// No workspace is mounted. Apply treats this as a silent no-op.
    #[error("No workspace available")]
    WorkspaceUnavailable,

    #[error("Failed to write applied theme manifest {path}: {source}")]
    ManifestWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating WebClip for icon bundle {bundle_id}: {source}")]
    WebClipCreationFailed {
        bundle_id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {path}: {source}")]
    DirectoryListingFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    /// Bundle id carried by a per-app failure.
    pub fn bundle_id(&self) -> Option<&str> {
        match self {
            ThemeError::WebClipCreationFailed { bundle_id, .. } => Some(bundle_id),
            _ => None,
        }
    }
}
