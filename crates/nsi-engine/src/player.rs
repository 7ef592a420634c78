//! Player state management.

use std::collections::BTreeMap;

use nsi_core::{Grade, ItemRef, Room, RoomId};

/// A room the player has left, as remembered in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Room id.
    pub room: RoomId,
    /// Room name at the time of the visit.
    pub name: String,
}

/// The player's current state in a session.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Display name.
    pub name: String,
    /// Room the player stands in.
    pub location: RoomId,
    /// Rooms left behind, oldest first. Never deduplicated.
    pub history: Vec<Visit>,
    /// Picked-up units, in pickup order.
    pub inventory: Vec<ItemRef>,
    /// Letter grade per class name.
    pub grades: BTreeMap<String, Grade>,
    /// Aggregate score.
    pub gpa: f64,
}

impl PlayerState {
    /// Create a player standing in `location`.
    pub fn new(name: impl Into<String>, location: RoomId, gpa: f64) -> Self {
        Self {
            name: name.into(),
            location,
            history: Vec::new(),
            inventory: Vec::new(),
            grades: BTreeMap::new(),
            gpa,
        }
    }

    /// Move to `next`, remembering the room being left.
    pub fn move_to(&mut self, left: &Room, next: RoomId) {
        self.history.push(Visit {
            room: left.id,
            name: left.name.clone(),
        });
        self.location = next;
    }

    /// Whether a room with this exact name appears in the history.
    ///
    /// Matches by name, not id: two rooms sharing a name count as one.
    pub fn has_seen(&self, room_name: &str) -> bool {
        self.history.iter().any(|v| v.name == room_name)
    }

    /// Add an item reference to the inventory.
    pub fn add_item(&mut self, item: ItemRef) {
        self.inventory.push(item);
    }

    /// Remove one inventory entry named `name`. Returns false if none.
    pub fn remove_item(&mut self, name: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i.is_named(name)) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Number of inventory entries named `name`.
    pub fn count_items(&self, name: &str) -> u32 {
        self.inventory.iter().filter(|i| i.is_named(name)).count() as u32
    }

    /// Record a grade for `class`.
    ///
    /// A second recording for the same class averages the point values and
    /// converts back on the point scale. Returns the grade now stored.
    pub fn record_grade(&mut self, class: &str, grade: Grade) -> Grade {
        let stored = match self.grades.get(class) {
            Some(previous) => previous.averaged_with(grade),
            None => grade,
        };
        self.grades.insert(class.to_string(), stored);
        stored
    }

    /// Recompute the GPA as `(gpa + sum of grade points) / class_count`.
    ///
    /// The previous GPA is folded in and the divisor never changes, so this
    /// is not an average of the recorded grades.
    pub fn recalculate_gpa(&mut self, class_count: u32) -> f64 {
        let points: f64 = self.grades.values().map(|g| g.points()).sum();
        self.gpa = (self.gpa + points) / f64::from(class_count.max(1));
        self.gpa
    }
}
