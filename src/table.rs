//! Table Module
//!
//! The fixed-length slot table and its whole-image codec.
//!
//! ## Responsibilities
//! - Hold exactly `CAPACITY` slots, indexed by position
//! - Bounds-check slot access (the only lookup mechanism is by index)
//! - Encode/decode the entire table as one fixed-size image
//! - Linear find-by-name over occupied slots, lowest index wins

use crate::error::{Result, StoreError};
use crate::layout::{CAPACITY, IMAGE_SIZE, SLOT_SIZE};
use crate::record::Slot;

/// An ordered, fixed-length sequence of `CAPACITY` slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    slots: Vec<Slot>,
}

impl Table {
    /// A fresh table: every slot empty, fields cleared
    pub fn new() -> Self {
        let slots = (0..CAPACITY).map(|i| Slot::empty(i as u32)).collect();
        Self { slots }
    }

    /// Number of slots; fixed for the table's lifetime
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Borrow the slot at `id`, or fail with `IndexOutOfRange`
    pub fn slot(&self, id: usize) -> Result<&Slot> {
        self.slots.get(id).ok_or(StoreError::IndexOutOfRange {
            id: id as i64,
            capacity: CAPACITY,
        })
    }

    /// Mutably borrow the slot at `id`, or fail with `IndexOutOfRange`
    pub fn slot_mut(&mut self, id: usize) -> Result<&mut Slot> {
        self.slots.get_mut(id).ok_or(StoreError::IndexOutOfRange {
            id: id as i64,
            capacity: CAPACITY,
        })
    }

    /// Iterate over occupied slots in ascending index order.
    ///
    /// Restartable: each call yields a fresh iterator over the current
    /// table state.
    pub fn occupied(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|slot| slot.is_occupied())
    }

    /// Linear scan for the first occupied slot whose name matches
    /// `name` byte-for-byte. Duplicates resolve to the lowest index.
    pub fn find(&self, name: &str) -> Option<&Slot> {
        self.occupied().find(|slot| slot.name().matches(name))
    }

    /// Serialize the table as one `IMAGE_SIZE` block
    pub fn encode(&self) -> Vec<u8> {
        let mut image = vec![0u8; IMAGE_SIZE];
        for (slot, buf) in self.slots.iter().zip(image.chunks_exact_mut(SLOT_SIZE)) {
            slot.encode_into(buf);
        }
        image
    }

    /// Parse an image of exactly `IMAGE_SIZE` bytes.
    ///
    /// Anything shorter or longer fails with `CorruptImage` — the
    /// format has no headers and no variable-length parts, so the
    /// length check is the whole validation.
    pub fn decode(image: &[u8]) -> Result<Self> {
        if image.len() != IMAGE_SIZE {
            return Err(StoreError::CorruptImage {
                expected: IMAGE_SIZE,
                actual: image.len(),
            });
        }

        let slots = image.chunks_exact(SLOT_SIZE).map(Slot::decode).collect();
        Ok(Self { slots })
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
