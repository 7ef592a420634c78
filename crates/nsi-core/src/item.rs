use serde::{Deserialize, Serialize};

use crate::room::RoomId;

/// A stack of collectible units sitting in one room.
///
/// The item's identity is the room it occupies; `count` is how many units can
/// still be picked up there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Room the item occupies. Doubles as the item id.
    pub room: RoomId,
    /// Item name, matched case-insensitively.
    pub name: String,
    /// Text shown when the item is inspected.
    pub description: String,
    /// Remaining pickable units.
    #[serde(default)]
    pub count: u32,
}

impl Item {
    /// Create an empty item record in `room`.
    pub fn new(room: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            room: RoomId(room),
            name: name.into(),
            description: description.into(),
            count: 0,
        }
    }

    /// Builder-style: set the initial count.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// A reference to this item suitable for the player's inventory.
    pub fn to_ref(&self) -> ItemRef {
        ItemRef {
            origin: self.room,
            name: self.name.clone(),
        }
    }
}

/// An inventory entry: which item record a unit came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    /// Room the unit was picked up in.
    pub origin: RoomId,
    /// Name of the item.
    pub name: String,
}

impl ItemRef {
    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_case_insensitively() {
        let item = Item::new(4, "Scantron", "A bubble sheet.");
        assert!(item.is_named("scantron"));
        assert!(item.is_named("  SCANTRON "));
        assert!(!item.is_named("pencil"));
    }

    #[test]
    fn to_ref_keeps_origin() {
        let item = Item::new(4, "scantron", "").with_count(2);
        let r = item.to_ref();
        assert_eq!(r.origin, RoomId(4));
        assert!(r.is_named("Scantron"));
    }
}
