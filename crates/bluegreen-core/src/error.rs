//! Error types for the simulator.

use thiserror::Error;

/// Result type alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur in the simulator.
///
/// `NotDeployed` is the only operation failure: the system has no real
/// work that can fail, so everything else concerns configuration input.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("no new version deployed; deploy before switching traffic")]
    NotDeployed,

    #[error("failed to read config: {0}")]
    ConfigRead(String),

    #[error("invalid config: {0}")]
    ConfigParse(String),

    #[error("invalid version literal: {0}")]
    VersionParse(String),
}
