// error.rs — crate-level error types

use std::path::PathBuf;

/// Errors produced while preparing the control core.
///
/// Controller and projection paths never fail; they degrade to
/// "no update this tick". Only configuration loading can error.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for [`ControlConfig`](crate::ControlConfig).
    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ControlError>;
