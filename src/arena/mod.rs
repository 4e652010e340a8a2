//! Generational slot arena.
//!
//! Dense slot storage with an intrusive free list and per-slot generation
//! counters. Removing a value frees its slot for reuse; the generation bump
//! on reuse means an `ArenaIndex` captured before the removal can never be
//! mistaken for the slot's new occupant (ABA protection). A stale index is
//! simply *absent*: `get` returns `None`, `remove` returns `None`.
//!
//! Slot state is an enum rather than a `union`, so no `unsafe` is needed for
//! occupancy tracking; the free list threads through the `Free` variant.

use core::fmt;
use core::mem;


/// A generational index into an [`Arena`].
///
/// Pairs a slot position with the generation the slot carried when the value
/// was inserted. The index is plain `Copy` data; holding one does not keep
/// the value alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaIndex {
    index: u32,
    generation: u32,
}

impl ArenaIndex {
    /// The slot position within the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// The slot generation this index was issued under.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

enum SlotState<T> {
    Occupied(T),
    Free { next_free: Option<u32> },
}

struct Slot<T> {
    /// Bumped every time the slot is reused, never on free.
    generation: u32,
    state: SlotState<T>,
}

impl<T> Slot<T> {
    #[inline]
    fn value(&self) -> Option<&T> {
        match &self.state {
            SlotState::Occupied(value) => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            SlotState::Occupied(value) => Some(value),
            SlotState::Free { .. } => None,
        }
    }
}

/// A growable arena of `T` addressed by generational indices.
///
/// Insertion is O(1) amortized (free slots are reused before the backing
/// vector grows), removal and lookup are O(1). Values are dropped when
/// removed, when the arena is cleared, and when the arena itself is dropped.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of live values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the arena holds no live values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value, reusing a freed slot when one is available.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` slots.
    pub fn insert(&mut self, value: T) -> ArenaIndex {
        self.len += 1;

        if let Some(idx) = self.free_head {
            let slot = &mut self.slots[idx as usize];
            let next_free = match slot.state {
                SlotState::Free { next_free } => next_free,
                SlotState::Occupied(_) => panic!("free list points at an occupied slot"),
            };
            self.free_head = next_free;

            // Reuse: the bump here is what invalidates indices issued for
            // the slot's previous occupant.
            slot.generation = slot.generation.wrapping_add(1);
            slot.state = SlotState::Occupied(value);

            ArenaIndex {
                index: idx,
                generation: slot.generation,
            }
        } else {
            assert!(
                self.slots.len() < u32::MAX as usize,
                "arena slot capacity exhausted"
            );
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                state: SlotState::Occupied(value),
            });

            ArenaIndex {
                index: idx,
                generation: 0,
            }
        }
    }

    /// Returns the value at `idx`, or `None` if the index is stale or was
    /// never issued by this arena.
    pub fn get(&self, idx: ArenaIndex) -> Option<&T> {
        let slot = self.slots.get(idx.index as usize)?;
        if slot.generation != idx.generation {
            return None;
        }
        slot.value()
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, idx: ArenaIndex) -> Option<&mut T> {
        let slot = self.slots.get_mut(idx.index as usize)?;
        if slot.generation != idx.generation {
            return None;
        }
        slot.value_mut()
    }

    /// True if `idx` refers to a live value.
    #[inline]
    pub fn contains(&self, idx: ArenaIndex) -> bool {
        self.get(idx).is_some()
    }

    /// Removes and returns the value at `idx`; `None` (and no state change)
    /// if the index is stale. Removing the same index twice is a no-op the
    /// second time.
    pub fn remove(&mut self, idx: ArenaIndex) -> Option<T> {
        let slot = self.slots.get_mut(idx.index as usize)?;
        if slot.generation != idx.generation || slot.value().is_none() {
            return None;
        }

        let state = mem::replace(
            &mut slot.state,
            SlotState::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(idx.index);
        self.len -= 1;

        match state {
            SlotState::Occupied(value) => Some(value),
            SlotState::Free { .. } => unreachable!("occupancy checked above"),
        }
    }

    /// Drops every live value and frees all slots.
    ///
    /// Slot generations survive a clear, so indices issued before the clear
    /// stay invalid after it, including across slot reuse.
    pub fn clear(&mut self) {
        self.free_head = None;
        self.len = 0;
        for (i, slot) in self.slots.iter_mut().enumerate().rev() {
            slot.state = SlotState::Free {
                next_free: self.free_head,
            };
            self.free_head = Some(i as u32);
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}
