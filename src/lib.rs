//! # slotdb
//!
//! A fixed-slot, file-backed address record store with:
//! - A fixed table of 100 slots, addressed directly by index
//! - Bounded, null-terminated text fields with a truncation policy
//! - Whole-image persistence (the entire table is one fixed-size block)
//! - An explicit store handle — no process-global connection state
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  CLI                        │
//! │   create / get / set / delete / find / list │
//! └─────────────────────┬───────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────┐
//! │                  Store                      │
//! │        (one file handle + one table)        │
//! └─────────────────────┬───────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────┐
//! │                  Table                      │
//! │      CAPACITY slots, encode/decode to a     │
//! │         fixed-size binary image             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Mutations happen in memory; durability is an explicit [`Store::save`],
//! which rewrites the full image from offset 0 and flushes. A reopened
//! store sees exactly the last saved image.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod layout;

pub mod record;
pub mod store;
pub mod table;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StoreError};
pub use layout::{CAPACITY, IMAGE_SIZE, MAX_DATA, SLOT_SIZE};
pub use record::Record;
pub use store::Store;
pub use table::Table;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of slotdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
