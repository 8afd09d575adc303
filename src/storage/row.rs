//! Timestamp row
//!
//! The slot array, tag index and free list of a single timestamp, kept in
//! one type so they can only change together.

use std::collections::{BTreeSet, HashMap};

use crate::cell::ValueCell;

/// Per-timestamp storage: slots, tag → slot index, reclaimed slots
///
/// ## Invariants
/// - every slot in `tags` is `< slots.len()` and absent from `free`
/// - every slot in `free` is `< slots.len()`
/// - slots are never removed, only overwritten by a later placement
#[derive(Debug, Clone)]
pub(crate) struct TimestampRow {
    /// Physically resident cells (live, stale or orphaned)
    slots: Vec<ValueCell>,

    /// Live tags and the slot holding each
    tags: HashMap<String, usize>,

    /// Reclaimed slots, reused lowest first
    free: BTreeSet<usize>,

    /// Stamp of the last mutation, checked by handle resolution
    generation: u64,
}

/// Where the cells of one placement landed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub reused_free: usize,
    pub overwritten: usize,
    pub appended: usize,
}

impl TimestampRow {
    pub(crate) fn with_capacity(capacity: usize, generation: u64) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            tags: HashMap::with_capacity(capacity),
            free: BTreeSet::new(),
            generation,
        }
    }

    /// Upsert-merge a batch of cells into the row
    ///
    /// The tag index is rebuilt from scratch: tags missing from `cells` stop
    /// being addressable while their slots stay resident (orphans).
    ///
    /// Placement order:
    /// 1. free-listed slots (consumed from the free list)
    /// 2. any other existing slot, overwritten in place
    /// 3. new slots appended at the end
    pub(crate) fn place(
        &mut self,
        timestamp: i64,
        cells: Vec<ValueCell>,
        generation: u64,
    ) -> Placement {
        self.tags.clear();
        self.generation = generation;

        let mut placement = Placement::default();
        let mut incoming = cells.into_iter().map(|mut cell| {
            cell.set_timestamp(timestamp);
            cell
        });

        // Step 1: free-listed slots
        let mut reused = BTreeSet::new();
        while let Some(&slot) = self.free.first() {
            let Some(cell) = incoming.next() else { break };
            self.free.remove(&slot);
            reused.insert(slot);
            self.occupy(slot, cell);
            placement.reused_free += 1;
        }

        // Step 2: resident slots outside the free list
        for slot in 0..self.slots.len() {
            if reused.contains(&slot) || self.free.contains(&slot) {
                continue;
            }
            let Some(cell) = incoming.next() else { break };
            self.occupy(slot, cell);
            placement.overwritten += 1;
        }

        // Step 3: grow the row
        for cell in incoming {
            let slot = self.slots.len();
            self.slots.push(cell);
            self.register(slot);
            placement.appended += 1;
        }

        placement
    }

    /// Reclaim the slot of `tag`; its content stays until reused
    pub(crate) fn erase_tag(&mut self, tag: &str, generation: u64) -> bool {
        match self.tags.remove(tag) {
            Some(slot) => {
                self.free.insert(slot);
                self.generation = generation;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Slot of a live tag
    pub(crate) fn live_slot(&self, tag: &str) -> Option<usize> {
        self.tags
            .get(tag)
            .copied()
            .filter(|slot| !self.free.contains(slot))
    }

    pub(crate) fn contains_tag(&self, tag: &str) -> bool {
        self.live_slot(tag).is_some()
    }

    pub(crate) fn get(&self, tag: &str) -> Option<&ValueCell> {
        self.live_slot(tag).map(|slot| &self.slots[slot])
    }

    pub(crate) fn slot(&self, slot: usize) -> Option<&ValueCell> {
        self.slots.get(slot)
    }

    /// Every resident slot, in slot order
    pub(crate) fn cells(&self) -> Vec<&ValueCell> {
        self.slots.iter().collect()
    }

    /// Tag-addressable cells only, in slot order
    pub(crate) fn live_cells(&self) -> Vec<&ValueCell> {
        self.live_slots()
            .into_iter()
            .map(|slot| &self.slots[slot])
            .collect()
    }

    /// Live tag names, in slot order
    pub(crate) fn tags(&self) -> Vec<&str> {
        let mut tagged: Vec<(usize, &str)> = self
            .tags
            .iter()
            .filter(|(_, slot)| !self.free.contains(slot))
            .map(|(tag, &slot)| (slot, tag.as_str()))
            .collect();
        tagged.sort_unstable_by_key(|(slot, _)| *slot);
        tagged.into_iter().map(|(_, tag)| tag).collect()
    }

    pub(crate) fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn free_count(&self) -> usize {
        self.free.len()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn occupy(&mut self, slot: usize, cell: ValueCell) {
        self.slots[slot] = cell;
        self.register(slot);
    }

    /// Index the tag of `slot`; a tag repeated within one batch keeps its first slot
    fn register(&mut self, slot: usize) {
        let tag = self.slots[slot].tag().to_string();
        self.tags.entry(tag).or_insert(slot);
    }

    fn live_slots(&self) -> Vec<usize> {
        let mut slots: Vec<usize> = self
            .tags
            .values()
            .copied()
            .filter(|slot| !self.free.contains(slot))
            .collect();
        slots.sort_unstable();
        slots
    }
}
