//! Store Module
//!
//! The store handle: one open file plus one in-memory table.
//!
//! ## Responsibilities
//! - Bind a table to a storage path (create fresh or load existing)
//! - Route slot operations through bounds and occupancy checks
//! - Persist the whole image on an explicit save
//!
//! ## Durability Model
//! Mutations touch only the in-memory table. [`Store::save`] is the one
//! durability boundary: it rewrites the full image from offset 0 and
//! flushes. A failed save leaves the on-disk image as it was; the
//! in-memory table keeps the attempted changes and save may be retried.
//!
//! The handle is owned by the caller — there is no ambient global, and
//! any number of stores can coexist in one process. [`Store::close`]
//! consumes the handle, so use-after-close and double-close are compile
//! errors rather than runtime states.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::layout::{CAPACITY, IMAGE_SIZE};
use crate::record::{Record, Slot};
use crate::table::Table;

/// An open record store
#[derive(Debug)]
pub struct Store {
    path: PathBuf,

    /// Open storage handle; held for the store's lifetime
    file: File,

    /// The in-memory table, always exactly `CAPACITY` slots
    table: Table,
}

impl Store {
    /// Create a store with a fresh table, all slots empty.
    ///
    /// Existing content at `path` is not read and will be overwritten
    /// by the next [`Store::save`].
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)
            .map_err(|source| StoreError::StorageUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), capacity = CAPACITY, "created fresh table");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            table: Table::new(),
        })
    }

    /// Open a store from an existing image.
    ///
    /// Fails with `StorageUnreadable` if the path cannot be opened and
    /// `CorruptImage` if the file does not hold a full image.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| StoreError::StorageUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        // Read everything; decode enforces the exact image size.
        let mut image = Vec::with_capacity(IMAGE_SIZE);
        file.read_to_end(&mut image)?;
        let table = Table::decode(&image)?;

        tracing::debug!(path = %path.display(), "loaded table image");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            table,
        })
    }

    /// The bound storage path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of slots in the table
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Get the record in slot `id`.
    ///
    /// Fails with `SlotNotSet` if the slot is empty.
    pub fn get(&self, id: usize) -> Result<Record> {
        let slot = self.table.slot(id)?;
        if !slot.is_occupied() {
            return Err(StoreError::SlotNotSet { id });
        }
        Ok(record_view(slot))
    }

    /// Store a record in slot `id`.
    ///
    /// Sets are not updates: an occupied slot fails with
    /// `SlotAlreadySet` and keeps its record unchanged. Fields longer
    /// than the bounded width truncate. In-memory only until
    /// [`Store::save`].
    pub fn set(&mut self, id: usize, name: &str, email: &str) -> Result<()> {
        let slot = self.table.slot_mut(id)?;
        if slot.is_occupied() {
            return Err(StoreError::SlotAlreadySet { id });
        }

        slot.fill(name, email);
        tracing::debug!(id, "slot set");
        Ok(())
    }

    /// Clear slot `id`, zero-filling its fields.
    ///
    /// Deleting an empty slot is an idempotent no-op.
    pub fn delete(&mut self, id: usize) -> Result<()> {
        let slot = self.table.slot_mut(id)?;
        if slot.is_occupied() {
            slot.clear();
            tracing::debug!(id, "slot cleared");
        }
        Ok(())
    }

    /// Find the first occupied slot whose name matches exactly.
    ///
    /// Linear scan in index order; duplicate names resolve to the
    /// lowest index. Fails with `NotFound` when no slot matches.
    pub fn find(&self, name: &str) -> Result<Record> {
        self.table
            .find(name)
            .map(record_view)
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    /// Iterate over occupied records in ascending index order.
    ///
    /// Restartable: each call yields a fresh iterator.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.table.occupied().map(record_view)
    }

    /// Persist the whole table as one fixed-size image.
    ///
    /// Rewinds to offset 0, writes the full image, truncates any
    /// trailing bytes a pre-existing longer file may have held, and
    /// flushes to disk. The only durability boundary.
    pub fn save(&mut self) -> Result<()> {
        let image = self.table.encode();

        self.file.seek(SeekFrom::Start(0))?;
        self.file
            .write_all(&image)
            .map_err(|source| StoreError::StorageWriteFailed {
                expected: IMAGE_SIZE,
                source,
            })?;
        self.file.set_len(IMAGE_SIZE as u64)?;
        self.file
            .sync_all()
            .map_err(|source| StoreError::FlushFailed { source })?;

        tracing::debug!(path = %self.path.display(), bytes = IMAGE_SIZE, "image saved");
        Ok(())
    }

    /// Close the store, releasing the storage handle and the table.
    ///
    /// Unsaved mutations are discarded. Consumes the handle, so no
    /// operation is possible afterward.
    pub fn close(self) -> Result<()> {
        tracing::debug!(path = %self.path.display(), "store closed");
        Ok(())
    }
}

/// Owned view of an occupied slot
fn record_view(slot: &Slot) -> Record {
    Record {
        id: slot.id() as usize,
        name: slot.name().text().into_owned(),
        email: slot.email().text().into_owned(),
    }
}
