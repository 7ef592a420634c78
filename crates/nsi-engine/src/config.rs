//! Configuration for a game session.

/// Tunable scoring and naming rules.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Divisor of the GPA recompute. Fixed, whatever the number of grades.
    pub class_count: u32,
    /// GPA before any grade is recorded.
    pub baseline_gpa: f64,
    /// Name used when the player enters a blank one.
    pub default_name: String,
    /// Item consumed to sit quizzes and exams.
    pub currency: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            class_count: 3,
            baseline_gpa: 1.0,
            default_name: "student".to_string(),
            currency: "scantron".to_string(),
        }
    }
}

impl GameConfig {
    /// Set the GPA divisor (at least 1).
    pub fn with_class_count(mut self, class_count: u32) -> Self {
        self.class_count = class_count.max(1);
        self
    }

    /// Set the starting GPA.
    pub fn with_baseline_gpa(mut self, gpa: f64) -> Self {
        self.baseline_gpa = gpa;
        self
    }

    /// Set the fallback player name.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }
}
