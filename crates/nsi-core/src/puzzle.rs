use std::fmt;

use serde::{Deserialize, Serialize};

use crate::room::RoomId;

/// The type of a gating puzzle.
///
/// Parsed case-sensitively from the raw type string: only `"Quiz"` and
/// `"Exam"` are recognised. Anything else is kept verbatim and never gates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PuzzleKind {
    /// A short quiz: 1 scantron, up to 3 questions.
    Quiz,
    /// An exam: 2 scantrons, up to 2 questions, needs confirmation.
    Exam,
    /// An unrecognised type string.
    Other(String),
}

impl PuzzleKind {
    /// Scantrons needed to attempt this kind.
    pub fn scantron_requirement(&self) -> u32 {
        match self {
            Self::Quiz => 1,
            Self::Exam => 2,
            Self::Other(_) => 0,
        }
    }

    /// Maximum number of questions presented in one sitting.
    pub fn question_cap(&self) -> usize {
        match self {
            Self::Quiz => 3,
            Self::Exam => 2,
            Self::Other(_) => 0,
        }
    }
}

impl From<String> for PuzzleKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Quiz" => Self::Quiz,
            "Exam" => Self::Exam,
            _ => Self::Other(s),
        }
    }
}

impl From<PuzzleKind> for String {
    fn from(kind: PuzzleKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiz => write!(f, "Quiz"),
            Self::Exam => write!(f, "Exam"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// A multiple-choice question gating a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Room the puzzle gates.
    pub room: RoomId,
    /// Quiz or exam.
    #[serde(rename = "type")]
    pub kind: PuzzleKind,
    /// Question text.
    pub question: String,
    /// Options A through D.
    pub options: [String; 4],
    /// The correct answer token, compared case-insensitively.
    pub answer: String,
    /// One-way flag; never reset once set.
    #[serde(default)]
    pub solved: bool,
}

impl Puzzle {
    /// Create an unsolved puzzle.
    pub fn new(
        room: u32,
        kind: PuzzleKind,
        question: impl Into<String>,
        options: [&str; 4],
        answer: impl Into<String>,
    ) -> Self {
        Self {
            room: RoomId(room),
            kind,
            question: question.into(),
            options: options.map(str::to_string),
            answer: answer.into(),
            solved: false,
        }
    }

    /// Compare the first token of `input` against the correct answer,
    /// ignoring case.
    pub fn is_correct(&self, input: &str) -> bool {
        input
            .split_whitespace()
            .next()
            .is_some_and(|token| token.to_lowercase() == self.answer.to_lowercase())
    }
}

/// Not enough scantrons to attempt a puzzle set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    /// The kind that was attempted.
    pub kind: PuzzleKind,
    /// Scantrons required.
    pub required: u32,
    /// Scantrons held.
    pub held: u32,
}

/// All puzzles in the game and their solved state.
#[derive(Debug, Clone, Default)]
pub struct PuzzleBank {
    puzzles: Vec<Puzzle>,
}

impl PuzzleBank {
    /// Create a bank from puzzle definitions in any order.
    pub fn new(puzzles: Vec<Puzzle>) -> Self {
        Self { puzzles }
    }

    /// All puzzles bound to `room`, in definition order.
    pub fn puzzles_in_room(&self, room: RoomId) -> Vec<&Puzzle> {
        self.puzzles.iter().filter(|p| p.room == room).collect()
    }

    /// Bank indices of unsolved puzzles of `kind` in `room`.
    pub fn unsolved_in_room(&self, room: RoomId, kind: &PuzzleKind) -> Vec<usize> {
        self.puzzles
            .iter()
            .enumerate()
            .filter(|(_, p)| p.room == room && &p.kind == kind && !p.solved)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Puzzle at a bank index.
    pub fn get(&self, idx: usize) -> Option<&Puzzle> {
        self.puzzles.get(idx)
    }

    /// Mark a puzzle solved. Returns false if the index is unknown.
    pub fn mark_solved(&mut self, idx: usize) -> bool {
        match self.puzzles.get_mut(idx) {
            Some(p) => {
                p.solved = true;
                true
            }
            None => false,
        }
    }

    /// Scantrons needed for a raw puzzle type: `quiz` 1, `exam` 2, else 0.
    ///
    /// Lookup by type string for callers holding raw campus data. Unlike the
    /// stored puzzle type, it ignores case. Typed callers use
    /// [`PuzzleKind::scantron_requirement`].
    pub fn scantron_requirement(puzzle_type: &str) -> u32 {
        match puzzle_type.to_lowercase().as_str() {
            "quiz" => PuzzleKind::Quiz.scantron_requirement(),
            "exam" => PuzzleKind::Exam.scantron_requirement(),
            _ => 0,
        }
    }

    /// Check whether `held` scantrons cover the requirement for `kind`.
    pub fn has_enough_scantrons(held: u32, kind: &PuzzleKind) -> Result<(), Shortfall> {
        let required = kind.scantron_requirement();
        if held >= required {
            Ok(())
        } else {
            Err(Shortfall {
                kind: kind.clone(),
                required,
                held,
            })
        }
    }

    /// Every puzzle in the bank.
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }
}
