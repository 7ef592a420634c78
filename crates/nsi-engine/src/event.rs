//! Plain-data events emitted by a [`GameSession`](crate::GameSession).
//!
//! The engine never formats text for the player. Front ends render these.

use nsi_core::{Direction, Grade, ItemRef, PuzzleKind, Room};

/// A room as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    /// Room name.
    pub name: String,
    /// Room description.
    pub description: String,
    /// Directions with an exit.
    pub exits: Vec<Direction>,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            description: room.description.clone(),
            exits: room.exits.open(),
        }
    }
}

/// A question as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position in the current sitting.
    pub number: usize,
    /// Questions in the current sitting.
    pub total: usize,
    /// Question text.
    pub question: String,
    /// Options A through D.
    pub options: [String; 4],
}

/// What the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// `start` or `exit`.
    Menu,
    /// A player name.
    Name,
    /// An exploring command.
    Command,
    /// `yes` to sit the exam, anything else to defer.
    ExamConfirmation,
    /// An answer to the pending question.
    Answer,
}

/// Something that happened while handling a line.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The game title and main-menu options.
    Intro,
    /// The menu accepts only `start` and `exit`.
    InvalidMenuCommand,
    /// Ask for the player's name.
    NamePrompt,
    /// The player has been named and the game begins.
    Welcome {
        /// The name in use.
        name: String,
    },
    /// The player is in a room.
    Arrived {
        /// The room.
        room: RoomView,
        /// True when no room with this name is in the history.
        first_visit: bool,
    },
    /// No exit in the requested direction.
    NoExit {
        /// The requested direction.
        direction: Direction,
    },
    /// The command list, with the current room for the map.
    Help {
        /// Name of the room the player is in.
        room: String,
    },
    /// Inventory and report card.
    Backpack {
        /// Inventory entries in pickup order.
        items: Vec<ItemRef>,
        /// Grade per class, sorted by class name.
        grades: Vec<(String, Grade)>,
        /// Current GPA.
        gpa: f64,
    },
    /// Scantrons lying in the current room.
    Explored {
        /// Units available.
        count: u32,
    },
    /// Description of an item in the room.
    Inspected {
        /// Item name as typed.
        name: String,
        /// Item description.
        description: String,
    },
    /// No such item available here.
    NothingToInspect {
        /// Item name as typed.
        name: String,
    },
    /// One unit was added to the inventory.
    PickedUp {
        /// Item name.
        name: String,
    },
    /// No unit of that item is available here.
    NothingToPickUp {
        /// Item name as typed.
        name: String,
    },
    /// The command was not recognised.
    InvalidCommand {
        /// The input as read.
        input: String,
    },
    /// Not enough scantrons to sit a puzzle set.
    Shortfall {
        /// Quiz or exam.
        kind: PuzzleKind,
        /// Scantrons required.
        required: u32,
        /// Scantrons held.
        held: u32,
    },
    /// A quiz begins.
    QuizStarted {
        /// Questions in this sitting.
        total: usize,
    },
    /// An exam is waiting; ask whether to sit it now.
    ExamConfirmation,
    /// The player declined the exam.
    ExamDeferred,
    /// An exam begins.
    ExamStarted {
        /// Questions in this sitting.
        total: usize,
    },
    /// A question to answer.
    Question(QuestionView),
    /// The verdict on the last answer.
    Answered {
        /// Whether it matched.
        correct: bool,
        /// The expected answer.
        correct_answer: String,
    },
    /// A sitting is over and the grade has been recorded.
    AssessmentFinished {
        /// Class the grade is recorded under.
        class: String,
        /// Correct answers.
        correct: usize,
        /// Questions presented.
        total: usize,
        /// Grade earned in this sitting.
        grade: Grade,
        /// Grade now on the report card for the class.
        recorded: Grade,
        /// Recomputed GPA.
        gpa: f64,
    },
    /// The game is over.
    Goodbye,
}
