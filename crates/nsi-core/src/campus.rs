//! Campus definitions: the already-parsed rooms, items, and puzzles the game
//! is played on.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::graph::RoomGraph;
use crate::item::Item;
use crate::puzzle::{Puzzle, PuzzleBank};
use crate::room::{Room, RoomId};

const BUILTIN_CAMPUS: &str = include_str!("../data/campus.json");

/// Everything needed to set up a game, as loaded from a campus file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusData {
    /// Room definitions. Sorted by id when the graph is built.
    pub rooms: Vec<Room>,
    /// One collectible record per room that can hold units.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Gating puzzles in any order.
    #[serde(default)]
    pub puzzles: Vec<Puzzle>,
}

impl CampusData {
    /// The default Not-So Ivy League College campus.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN_CAMPUS)
    }

    /// Parse and validate campus data from a JSON string.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Read, parse and validate a campus file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that every item and puzzle points at a defined room.
    pub fn validate(&self) -> CoreResult<()> {
        let ids: HashSet<RoomId> = self.rooms.iter().map(|r| r.id).collect();

        for item in &self.items {
            if !ids.contains(&item.room) {
                return Err(CoreError::UnknownRoom {
                    what: format!("item \"{}\"", item.name),
                    room: item.room,
                });
            }
        }
        for puzzle in &self.puzzles {
            if !ids.contains(&puzzle.room) {
                return Err(CoreError::UnknownRoom {
                    what: format!("puzzle \"{}\"", puzzle.question),
                    room: puzzle.room,
                });
            }
        }
        Ok(())
    }

    /// Split into the runtime pieces: room graph, item records, puzzle bank.
    pub fn into_parts(self) -> CoreResult<(RoomGraph, Vec<Item>, PuzzleBank)> {
        let graph = RoomGraph::new(self.rooms)?;
        Ok((graph, self.items, PuzzleBank::new(self.puzzles)))
    }
}
