//! Error types for testctl-sync.

use std::path::PathBuf;

use thiserror::Error;

use testctl_core::ConfigError;
use testctl_renderer::RenderError;

/// All errors that can arise while generating the control file.
///
/// Recommendation query failures are not represented here: they degrade to an
/// empty substitution (see [`crate::recommends`]).
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the rendering engine, including a missing template.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Invalid generator configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
