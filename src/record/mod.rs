//! Record Module
//!
//! The data model: bounded text fields and fixed-position slots.
//!
//! ## Responsibilities
//! - Enforce the truncation policy for bounded text
//! - Encode/decode one slot to its fixed byte layout
//! - Present occupied slots to callers as owned [`Record`] values

mod field;
mod slot;

pub use field::BoundedField;
pub use slot::Slot;

use std::fmt;

/// Owned view of an occupied slot, as returned by queries.
///
/// Field bytes that are not valid UTF-8 (possible only in images written
/// by another program) are surfaced lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Slot position in the table
    pub id: usize,

    pub name: String,

    pub email: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.name, self.email)
    }
}
