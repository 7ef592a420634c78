//! Background scantron placement for College Chronicles.
//!
//! Owns the shared item collection and a recurring task that wipes and
//! redistributes a fixed pool of collectible units across rooms. The
//! foreground game and the background task both go through [`ItemStore`],
//! which serializes every read-modify-write behind one lock.

/// Configuration for the placement scheduler.
pub mod config;
/// Error types for the placement crate.
pub mod error;
/// The item collection and the redistribution algorithm.
pub mod pool;
/// The recurring background task and its lifecycle handle.
pub mod scheduler;
/// Thread-safe handle to the item collection.
pub mod store;

/// Re-export of [`config::PlacementConfig`].
pub use config::PlacementConfig;
/// Re-exports of [`error::PlacementError`] and [`error::PlacementResult`].
pub use error::{PlacementError, PlacementResult};
/// Re-export of [`pool::ItemPool`].
pub use pool::ItemPool;
/// Re-exports of [`scheduler::PlacementScheduler`] and [`scheduler::SchedulerState`].
pub use scheduler::{PlacementScheduler, SchedulerState};
/// Re-export of [`store::ItemStore`].
pub use store::ItemStore;
