//! Core types for College Chronicles: rooms, items, puzzles, and grades.
//!
//! This crate defines the static campus model the progression engine plays
//! on. It is independent of any front end: you can construct a
//! [`RoomGraph`] and [`PuzzleBank`] programmatically, or deserialize a
//! [`CampusData`] from JSON.

/// Campus definitions and the JSON loader.
pub mod campus;
/// Error types used throughout the crate.
pub mod error;
/// Letter grades and the two conversion scales.
pub mod grade;
/// The static room graph.
pub mod graph;
/// Collectible item records and inventory references.
pub mod item;
/// Puzzle definitions and the puzzle bank.
pub mod puzzle;
/// Room identifiers, directions, and room records.
pub mod room;

/// Re-export campus definitions.
pub use campus::CampusData;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export grade types.
pub use grade::Grade;
/// Re-export the room graph.
pub use graph::RoomGraph;
/// Re-export item types.
pub use item::{Item, ItemRef};
/// Re-export puzzle types.
pub use puzzle::{Puzzle, PuzzleBank, PuzzleKind, Shortfall};
/// Re-export room types.
pub use room::{Direction, Exits, Room, RoomId};
