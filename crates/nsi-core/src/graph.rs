use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::room::{Direction, Room, RoomId};

/// The static campus map. Rooms are kept sorted by id; the first one is the
/// starting room.
#[derive(Debug, Clone)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    by_id: HashMap<RoomId, usize>,
}

impl RoomGraph {
    /// Build a graph from room definitions.
    ///
    /// Rooms are sorted ascending by id. Fails on an empty list, a room that
    /// uses the reserved id 0, or duplicate ids. Exits pointing at unknown
    /// rooms are accepted and behave as "no exit" when followed.
    pub fn new(mut rooms: Vec<Room>) -> CoreResult<Self> {
        if rooms.is_empty() {
            return Err(CoreError::Validation("campus has no rooms".to_string()));
        }
        rooms.sort_by_key(|r| r.id);

        let mut by_id = HashMap::with_capacity(rooms.len());
        for (idx, room) in rooms.iter().enumerate() {
            if room.id.is_none() {
                return Err(CoreError::ReservedRoomId(room.name.clone()));
            }
            if by_id.insert(room.id, idx).is_some() {
                return Err(CoreError::DuplicateRoom(room.id));
            }
        }

        Ok(Self { rooms, by_id })
    }

    /// The room the player starts in.
    pub fn starting_room(&self) -> &Room {
        &self.rooms[0]
    }

    /// Look up a room by id.
    pub fn find_by_id(&self, id: RoomId) -> Option<&Room> {
        self.by_id.get(&id).map(|&idx| &self.rooms[idx])
    }

    /// Target of the exit from `room` in `direction`.
    ///
    /// Returns [`RoomId::NONE`] if there is no such exit or `room` is unknown.
    pub fn exit_id(&self, room: RoomId, direction: Direction) -> RoomId {
        self.find_by_id(room)
            .map(|r| r.exits.get(direction))
            .unwrap_or(RoomId::NONE)
    }

    /// Like [`exit_id`](Self::exit_id), but parses the direction from raw
    /// input first. Unrecognized directions yield [`RoomId::NONE`].
    ///
    /// Lookup for callers holding raw direction text. Typed callers go
    /// through [`Direction`] and `exit_id`.
    pub fn exit_for(&self, room: RoomId, direction: &str) -> RoomId {
        Direction::parse(direction)
            .map(|d| self.exit_id(room, d))
            .unwrap_or(RoomId::NONE)
    }

    /// Set the visited flag on a room. Unknown ids are ignored.
    pub fn mark_visited(&mut self, id: RoomId) {
        if let Some(&idx) = self.by_id.get(&id) {
            self.rooms[idx].visited = true;
        }
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false; a graph holds at least one room.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
