//! Error types for mangala-rover.

use thiserror::Error;

/// Crate error type.
///
/// Note: a missing rigid body or scene adapter is *not* an error: the
/// controller skips the tick silently (see [`crate::control::RoverController::tick`]).
#[derive(Error, Debug)]
pub enum RoverError {
    /// Invalid configuration, rejected before the control loop starts.
    #[error("configuration error: {0}")]
    Config(String),

    /// A scene-graph read failed mid-frame (e.g. a node was detached).
    ///
    /// Recovered locally: the affected visual update is skipped for the
    /// frame, physics stepping is never interrupted.
    #[error("visual node read failed: {0}")]
    VisualRead(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for RoverError {
    fn from(e: toml::de::Error) -> Self {
        RoverError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RoverError>;
