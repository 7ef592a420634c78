use std::fmt;

use serde::{Deserialize, Serialize};

/// A letter grade.
///
/// Two conversion scales exist and they intentionally disagree:
/// [`from_percentage`](Self::from_percentage) grades a single puzzle set,
/// while [`from_points`](Self::from_points) converts an averaged point value
/// back to a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 4 points.
    A,
    /// 3 points.
    B,
    /// 2 points.
    C,
    /// 1 point.
    D,
    /// 0 points.
    F,
}

impl Grade {
    /// Letter for a percentage score: ≥90 A, ≥80 B, ≥70 C, ≥60 D, else F.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::A
        } else if percentage >= 80.0 {
            Self::B
        } else if percentage >= 70.0 {
            Self::C
        } else if percentage >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Letter for a GPA point value: ≥3.7 A, ≥2.7 B, ≥1.7 C, ≥0.7 D, else F.
    pub fn from_points(points: f64) -> Self {
        if points >= 3.7 {
            Self::A
        } else if points >= 2.7 {
            Self::B
        } else if points >= 1.7 {
            Self::C
        } else if points >= 0.7 {
            Self::D
        } else {
            Self::F
        }
    }

    /// GPA points for this letter.
    pub fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// Average this grade with a newer one and reconvert on the point scale.
    pub fn averaged_with(self, newer: Grade) -> Self {
        Self::from_points((self.points() + newer.points()) / 2.0)
    }

    /// The letter as a string.
    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
