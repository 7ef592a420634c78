use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a room. `0` is reserved for "no exit".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl RoomId {
    /// The "no exit" marker. Never a valid room.
    pub const NONE: RoomId = RoomId(0);

    /// Returns true if this id denotes "no exit".
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the four cardinal exits a room can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Direction {
    /// All directions in exit order.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Parse a direction from its single-letter or full-word form.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "e" | "east" => Some(Self::East),
            "s" | "south" => Some(Self::South),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four exit targets of a room. Missing exits are [`RoomId::NONE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exits {
    /// Room to the north.
    #[serde(default)]
    pub north: RoomId,
    /// Room to the east.
    #[serde(default)]
    pub east: RoomId,
    /// Room to the south.
    #[serde(default)]
    pub south: RoomId,
    /// Room to the west.
    #[serde(default)]
    pub west: RoomId,
}

impl Exits {
    /// Target in the given direction, or [`RoomId::NONE`].
    pub fn get(&self, direction: Direction) -> RoomId {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Directions that lead somewhere.
    pub fn open(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !self.get(*d).is_none())
            .collect()
    }
}

/// A campus room. Only the visited flag changes after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Stable identifier.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Description shown on arrival.
    pub description: String,
    /// Exit targets.
    #[serde(default)]
    pub exits: Exits,
    /// Set when the player leaves the room.
    #[serde(default)]
    pub visited: bool,
}

impl Room {
    /// Create an unvisited room with no exits.
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: RoomId(id),
            name: name.into(),
            description: description.into(),
            exits: Exits::default(),
            visited: false,
        }
    }

    /// Builder-style: connect an exit in `direction` to room `target`.
    pub fn with_exit(mut self, direction: Direction, target: u32) -> Self {
        let target = RoomId(target);
        match direction {
            Direction::North => self.exits.north = target,
            Direction::East => self.exits.east = target,
            Direction::South => self.exits.south = target,
            Direction::West => self.exits.west = target,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_synonyms_resolve_identically() {
        for (short, long) in [("n", "north"), ("e", "east"), ("s", "south"), ("w", "west")] {
            assert_eq!(Direction::parse(short), Direction::parse(long));
            assert!(Direction::parse(short).is_some());
        }
        assert_eq!(Direction::parse("NORTH"), Some(Direction::North));
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn exits_default_to_none() {
        let room = Room::new(1, "Lobby", "").with_exit(Direction::East, 2);
        assert_eq!(room.exits.get(Direction::East), RoomId(2));
        assert!(room.exits.get(Direction::North).is_none());
        assert_eq!(room.exits.open(), vec![Direction::East]);
    }

    #[test]
    fn room_json_omits_optional_fields() {
        let json = r#"{"id": 3, "name": "Hall", "description": "Long.", "exits": {"west": 2}}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.id, RoomId(3));
        assert_eq!(room.exits.west, RoomId(2));
        assert!(room.exits.north.is_none());
        assert!(!room.visited);
    }
}
