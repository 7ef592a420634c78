//! Puzzle gates and in-progress quiz or exam sittings.

use nsi_core::{Grade, PuzzleBank, PuzzleKind, RoomId, Shortfall};

/// Outcome of the puzzle gate when the player enters a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Nothing outstanding in the room.
    Clear,
    /// A quiz can be sat now. Holds the bank indices to present.
    Quiz(Vec<usize>),
    /// No quiz is outstanding but an exam is; ask before sitting it.
    ExamPending,
    /// A quiz is outstanding and the player cannot pay for it.
    Blocked(Shortfall),
}

/// Run the entry gate for `room` with `held` scantrons.
///
/// Quizzes come first. While any quiz is unsolved, exams are not considered
/// on this visit, even if the player cannot afford the quiz.
pub fn check_entry(bank: &PuzzleBank, room: RoomId, held: u32) -> Gate {
    let quizzes = bank.unsolved_in_room(room, &PuzzleKind::Quiz);
    if !quizzes.is_empty() {
        return match PuzzleBank::has_enough_scantrons(held, &PuzzleKind::Quiz) {
            Ok(()) => Gate::Quiz(capped(quizzes, &PuzzleKind::Quiz)),
            Err(shortfall) => Gate::Blocked(shortfall),
        };
    }
    if bank.unsolved_in_room(room, &PuzzleKind::Exam).is_empty() {
        Gate::Clear
    } else {
        Gate::ExamPending
    }
}

/// The player agreed to sit the exam in `room`.
///
/// Returns the bank indices to present, or the shortfall if `held` does not
/// cover the exam.
pub fn check_exam(bank: &PuzzleBank, room: RoomId, held: u32) -> Result<Vec<usize>, Shortfall> {
    PuzzleBank::has_enough_scantrons(held, &PuzzleKind::Exam)?;
    Ok(capped(
        bank.unsolved_in_room(room, &PuzzleKind::Exam),
        &PuzzleKind::Exam,
    ))
}

fn capped(mut indices: Vec<usize>, kind: &PuzzleKind) -> Vec<usize> {
    indices.truncate(kind.question_cap());
    indices
}

/// A quiz or exam being answered.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    class: String,
    kind: PuzzleKind,
    queue: Vec<usize>,
    position: usize,
    correct: usize,
}

impl Assessment {
    /// Begin a sitting over the given bank indices, graded under `class`.
    pub fn new(class: impl Into<String>, kind: PuzzleKind, queue: Vec<usize>) -> Self {
        Self {
            class: class.into(),
            kind,
            queue,
            position: 0,
            correct: 0,
        }
    }

    /// Class the grade will be recorded under.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Quiz or exam.
    pub fn kind(&self) -> &PuzzleKind {
        &self.kind
    }

    /// Bank index of the question awaiting an answer.
    pub fn current(&self) -> Option<usize> {
        self.queue.get(self.position).copied()
    }

    /// 1-based number of the current question.
    pub fn number(&self) -> usize {
        self.position + 1
    }

    /// Record an answer and move to the next question.
    pub fn record(&mut self, correct: bool) {
        if self.is_complete() {
            return;
        }
        if correct {
            self.correct += 1;
        }
        self.position += 1;
    }

    /// Whether every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.position >= self.queue.len()
    }

    /// Questions in this sitting.
    pub fn total(&self) -> usize {
        self.queue.len()
    }

    /// Correct answers so far.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Share of correct answers, 0 to 100.
    pub fn percentage(&self) -> f64 {
        if self.queue.is_empty() {
            return 0.0;
        }
        self.correct as f64 / self.queue.len() as f64 * 100.0
    }

    /// Letter grade for this sitting.
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}
