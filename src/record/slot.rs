//! Slot definitions
//!
//! One fixed-position record container. A slot is either occupied
//! (holding a name/email pair) or empty with both fields zero-filled —
//! an empty slot never carries stale text.

use crate::layout::{
    EMAIL_OFFSET, ID_OFFSET, MAX_DATA, NAME_OFFSET, OCCUPIED_OFFSET, SLOT_SIZE,
};

use super::BoundedField;

/// A single slot in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Ordinal position in the table; stable for the table's lifetime
    id: u32,

    /// Whether this slot currently holds a record
    occupied: bool,

    name: BoundedField,

    email: BoundedField,
}

impl Slot {
    /// Encoded size of one slot
    pub const ENCODED_SIZE: usize = SLOT_SIZE;

    /// Create an empty slot at the given position
    pub fn empty(id: u32) -> Self {
        Self {
            id,
            occupied: false,
            name: BoundedField::empty(),
            email: BoundedField::empty(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn name(&self) -> &BoundedField {
        &self.name
    }

    pub fn email(&self) -> &BoundedField {
        &self.email
    }

    /// Mark the slot occupied and store both fields, truncating
    /// independently. Occupancy checks are the caller's job.
    pub fn fill(&mut self, name: &str, email: &str) {
        self.occupied = true;
        self.name.set_text(name);
        self.email.set_text(email);
    }

    /// Mark the slot empty and zero-fill both fields
    pub fn clear(&mut self) {
        self.occupied = false;
        self.name.clear();
        self.email.clear();
    }

    /// Encode into `buf`, which must be exactly `ENCODED_SIZE` bytes
    pub fn encode_into(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len(), Self::ENCODED_SIZE);

        buf[ID_OFFSET..ID_OFFSET + 4].copy_from_slice(&self.id.to_le_bytes());
        let occupied: u32 = if self.occupied { 1 } else { 0 };
        buf[OCCUPIED_OFFSET..OCCUPIED_OFFSET + 4].copy_from_slice(&occupied.to_le_bytes());
        buf[NAME_OFFSET..NAME_OFFSET + MAX_DATA].copy_from_slice(self.name.as_bytes());
        buf[EMAIL_OFFSET..EMAIL_OFFSET + MAX_DATA].copy_from_slice(self.email.as_bytes());
    }

    /// Decode from `buf`, which must be exactly `ENCODED_SIZE` bytes.
    ///
    /// Any nonzero occupied word counts as occupied.
    pub fn decode(buf: &[u8]) -> Self {
        debug_assert_eq!(buf.len(), Self::ENCODED_SIZE);

        let id = u32::from_le_bytes(buf[ID_OFFSET..ID_OFFSET + 4].try_into().unwrap());
        let occupied =
            u32::from_le_bytes(buf[OCCUPIED_OFFSET..OCCUPIED_OFFSET + 4].try_into().unwrap());

        Self {
            id,
            occupied: occupied != 0,
            name: BoundedField::from_bytes(&buf[NAME_OFFSET..NAME_OFFSET + MAX_DATA]),
            email: BoundedField::from_bytes(&buf[EMAIL_OFFSET..EMAIL_OFFSET + MAX_DATA]),
        }
    }
}
