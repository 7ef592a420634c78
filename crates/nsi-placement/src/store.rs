use std::sync::{Arc, Mutex, MutexGuard};

use nsi_core::{Item, ItemRef, RoomId};
use rand::Rng;
use tracing::debug;

use crate::error::{PlacementError, PlacementResult};
use crate::pool::ItemPool;

/// Cloneable, thread-safe handle to the shared [`ItemPool`].
///
/// Every operation holds the lock for its whole read-modify-write, so a
/// pickup can never see a pool that has been wiped but not yet refilled.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    inner: Arc<Mutex<ItemPool>>,
}

impl ItemStore {
    /// Wrap item records in a shared store.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ItemPool::new(items))),
        }
    }

    fn lock(&self) -> PlacementResult<MutexGuard<'_, ItemPool>> {
        self.inner.lock().map_err(|_| PlacementError::Poisoned)
    }

    /// Run one placement tick under the lock. Returns the units placed.
    pub fn redistribute<R: Rng + ?Sized>(&self, pool_size: u32, rng: &mut R) -> PlacementResult<u32> {
        let mut pool = self.lock()?;
        let placed = pool.redistribute(pool_size, rng);
        debug!(
            generation = pool.generation(),
            placed,
            rooms = ?pool
                .items()
                .iter()
                .filter(|i| i.count > 0)
                .map(|i| (i.room.0, i.count))
                .collect::<Vec<_>>(),
            "scantrons redistributed"
        );
        Ok(placed)
    }

    /// Units available in `room`.
    pub fn count_in_room(&self, room: RoomId) -> PlacementResult<u32> {
        Ok(self.lock()?.count_in_room(room))
    }

    /// Description of an item named `name` that is available in `room`.
    pub fn describe(&self, room: RoomId, name: &str) -> PlacementResult<Option<String>> {
        Ok(self
            .lock()?
            .find_in_room(room, name)
            .map(|i| i.description.clone()))
    }

    /// Remove one unit of `name` from `room`, if any is available.
    pub fn take_one(&self, room: RoomId, name: &str) -> PlacementResult<Option<ItemRef>> {
        Ok(self.lock()?.take_one(room, name))
    }

    /// Sum of every count.
    pub fn total(&self) -> PlacementResult<u32> {
        Ok(self.lock()?.total())
    }

    /// Number of completed redistributions.
    pub fn generation(&self) -> PlacementResult<u64> {
        Ok(self.lock()?.generation())
    }

    /// Copy of every item record.
    pub fn snapshot(&self) -> PlacementResult<Vec<Item>> {
        Ok(self.lock()?.items().to_vec())
    }
}
