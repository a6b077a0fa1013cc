//! On-disk layout constants
//!
//! The image is a versionless fixed-layout format: `CAPACITY` slots
//! back to back, no header, no footer. Only self-consistency is
//! promised — images are written and read with the same layout and
//! byte order (little-endian), nothing is normalized for other readers.
//!
//! ## Slot Format
//! ```text
//! ┌─────────┬──────────────┬───────────────────┬───────────────────┐
//! │ id (4)  │ occupied (4) │ name (MAX_DATA)   │ email (MAX_DATA)  │
//! └─────────┴──────────────┴───────────────────┴───────────────────┘
//! ```
//!
//! Text fields are null-padded to full width and always terminate
//! within the bound. `occupied` serializes as 0 or 1.

/// Maximum byte width of a text field, terminator included
pub const MAX_DATA: usize = 512;

/// Number of slots in a table; fixed for the table's lifetime
pub const CAPACITY: usize = 100;

pub const ID_SIZE: usize = 4;
pub const OCCUPIED_SIZE: usize = 4;

pub const ID_OFFSET: usize = 0;
pub const OCCUPIED_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const NAME_OFFSET: usize = OCCUPIED_OFFSET + OCCUPIED_SIZE;
pub const EMAIL_OFFSET: usize = NAME_OFFSET + MAX_DATA;

/// Encoded size of one slot
pub const SLOT_SIZE: usize = EMAIL_OFFSET + MAX_DATA;

/// Exact size of the on-disk image
pub const IMAGE_SIZE: usize = CAPACITY * SLOT_SIZE;
