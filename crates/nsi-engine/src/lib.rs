//! Progression engine for College Chronicles.
//!
//! Turns player input lines into [`GameEvent`]s: command parsing, movement
//! with history, item pickup from the shared [`ItemStore`], puzzle gates that
//! charge scantrons, and grading with a running GPA. The engine is a pure
//! state machine and never touches stdin or stdout.
//!
//! [`ItemStore`]: nsi_placement::ItemStore

/// Puzzle gates and quiz or exam sittings.
pub mod assessment;
/// Session configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Events returned to the front end.
pub mod event;
/// Command parsing for player input.
pub mod parser;
/// Player state management.
pub mod player;
/// The game session state machine.
pub mod session;

pub use assessment::{Assessment, Gate};
pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use event::{GameEvent, Prompt, QuestionView, RoomView};
pub use parser::{Command, MenuCommand, parse_command, parse_menu};
pub use player::{PlayerState, Visit};
pub use session::GameSession;
