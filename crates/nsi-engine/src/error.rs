//! Error types for the progression engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running a session.
///
/// Player mistakes (bad commands, blocked exits, missing scantrons) are not
/// errors; they come back as [`GameEvent`](crate::GameEvent)s.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Campus data could not be loaded.
    #[error(transparent)]
    Campus(#[from] nsi_core::CoreError),

    /// The shared item collection failed.
    #[error(transparent)]
    Placement(#[from] nsi_placement::PlacementError),
}
