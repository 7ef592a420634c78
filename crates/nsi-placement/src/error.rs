/// Result type for placement operations.
pub type PlacementResult<T> = Result<T, PlacementError>;

/// Errors raised by the item store or the scheduler.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    /// A holder of the item lock panicked.
    #[error("item collection lock poisoned")]
    Poisoned,

    /// The scheduler interval must be non-zero.
    #[error("placement interval must be greater than zero")]
    ZeroInterval,

    /// The background runtime could not be built.
    #[error("failed to start placement runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
