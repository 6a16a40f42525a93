//! # Inventory
//!
//! [`BoatStore`] holds the boats currently on the books. It is a fixed set of
//! [`MAX_BOATS`] slots: adding a boat takes the first free slot, removing one frees it for
//! reuse. Slot order is an internal detail; anything shown to a user goes through
//! [`BoatStore::list_sorted`].
//!
//! Names are the key. Lookups ignore case and the store refuses a second boat whose name
//! matches an existing one.

use crate::error::{MarinaError, Result};
use crate::model::{name_key, BoatRecord};

/// Capacity of a store.
pub const MAX_BOATS: usize = 120;

/// Position of a record inside a [`BoatStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct BoatStore {
    slots: Vec<Option<BoatRecord>>,
}

impl Default for BoatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoatStore {
    pub fn new() -> Self {
        Self {
            slots: (0..MAX_BOATS).map(|_| None).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_BOATS
    }

    /// Places the record in the first free slot. A full store is reported before a
    /// duplicate name.
    pub fn add(&mut self, record: BoatRecord) -> Result<SlotId> {
        let free = self
            .slots
            .iter()
            .position(|s| s.is_none())
            .ok_or(MarinaError::StoreFull {
                capacity: MAX_BOATS,
            })?;
        if self.find(record.name()).is_some() {
            return Err(MarinaError::DuplicateName(record.name().to_string()));
        }
        tracing::debug!(name = record.name(), slot = free, "boat added");
        self.slots[free] = Some(record);
        Ok(SlotId(free))
    }

    /// Takes the named boat out of the store and hands it back.
    pub fn remove(&mut self, name: &str) -> Result<BoatRecord> {
        let slot = self
            .slot_of(name)
            .ok_or_else(|| MarinaError::NotFound(name.to_string()))?;
        let record = self.slots[slot.0]
            .take()
            .ok_or_else(|| MarinaError::NotFound(name.to_string()))?;
        tracing::debug!(name = record.name(), slot = slot.0, "boat removed");
        Ok(record)
    }

    pub fn find(&self, name: &str) -> Option<&BoatRecord> {
        self.slot_of(name).and_then(|slot| self.get(slot))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut BoatRecord> {
        let slot = self.slot_of(name)?;
        self.slots[slot.0].as_mut()
    }

    pub fn get(&self, slot: SlotId) -> Option<&BoatRecord> {
        self.slots.get(slot.0).and_then(|s| s.as_ref())
    }

    pub fn slot_of(&self, name: &str) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|r| r.matches_name(name)))
            .map(SlotId)
    }

    /// Every boat, ordered by name ignoring case. Boats whose names tie keep slot order.
    pub fn list_sorted(&self) -> Vec<&BoatRecord> {
        let mut live: Vec<(String, &BoatRecord)> =
            self.all().map(|r| (name_key(r.name()), r)).collect();
        live.sort_by(|a, b| a.0.cmp(&b.0));
        live.into_iter().map(|(_, r)| r).collect()
    }

    /// Every boat in slot order.
    pub fn all(&self) -> impl Iterator<Item = &BoatRecord> {
        self.slots.iter().flatten()
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut BoatRecord> {
        self.slots.iter_mut().flatten()
    }
}
