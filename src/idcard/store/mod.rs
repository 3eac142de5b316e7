//! # Storage Layer
//!
//! Records live in a single persisted *slot*: one named key whose value is the
//! JSON array of every [`EmployeeRecord`], in order. The [`SlotBackend`] trait
//! is the raw key-value I/O; [`RecordStore`] puts the record semantics on top.
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: Production storage, one `<key>.json` file per slot,
//!   written atomically.
//! - [`memory::MemSlot`]: In-memory storage for testing, with write-failure
//!   simulation.
//!
//! ## Load and Save Contract
//!
//! The store never hands a storage failure back to its caller:
//!
//! - **Empty slot**: the seed dataset is returned and persisted right away, so
//!   later loads see the same list.
//! - **Corrupt slot**: logged, an empty list is returned and the slot is left
//!   alone. There is no seed fallback in this case.
//! - **Failed write**: logged, `save` returns `false` and the session mirror
//!   keeps its previous contents.
//!
//! ## Identity
//!
//! Two lookups exist and they are not reconciled: [`find_by_key`] matches the
//! `ecNo` exactly (first match wins, duplicates are tolerated) and
//! [`find_by_index`] is positional.
//!
//! ## Concurrency
//!
//! Load and save are a plain read-then-write with no compare-and-swap. Two
//! sessions editing the same slot overwrite each other; the last write wins.

use crate::error::Result;
use crate::model::EmployeeRecord;

pub mod fs;
pub mod memory;

/// Raw durable key-value storage.
pub trait SlotBackend {
    /// Returns `Ok(None)` when the slot has never been written.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the slot value. Must not leave a partially written value behind.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;
}

pub struct RecordStore<B: SlotBackend> {
    backend: B,
    slot: String,
    seed: Vec<EmployeeRecord>,
    mirror: Option<Vec<EmployeeRecord>>,
}

impl<B: SlotBackend> RecordStore<B> {
    pub fn new(backend: B, slot: impl Into<String>, seed: Vec<EmployeeRecord>) -> Self {
        Self {
            backend,
            slot: slot.into(),
            seed,
            mirror: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// The last list loaded or successfully saved in this session.
    pub fn current(&self) -> Option<&[EmployeeRecord]> {
        self.mirror.as_deref()
    }

    pub fn load(&mut self) -> Vec<EmployeeRecord> {
        let stored = match self.backend.read_slot(&self.slot) {
            Ok(stored) => stored,
            Err(e) => {
                log::error!("Failed to read slot '{}': {}", self.slot, e);
                return Vec::new();
            }
        };

        let list = match stored.filter(|text| !text.is_empty()) {
            Some(text) => match serde_json::from_str::<Vec<EmployeeRecord>>(&text) {
                Ok(list) => list,
                Err(e) => {
                    log::error!("Stored records in slot '{}' are unreadable: {}", self.slot, e);
                    return Vec::new();
                }
            },
            None => {
                log::debug!(
                    "Slot '{}' is empty, seeding {} records",
                    self.slot,
                    self.seed.len()
                );
                let seed = self.seed.clone();
                self.save(&seed);
                seed
            }
        };

        self.mirror = Some(list.clone());
        list
    }

    /// Overwrites the slot with `list`. Returns whether the write went through.
    pub fn save(&mut self, list: &[EmployeeRecord]) -> bool {
        match self.try_save(list) {
            Ok(()) => {
                log::debug!("Saved {} records to slot '{}'", list.len(), self.slot);
                self.mirror = Some(list.to_vec());
                true
            }
            Err(e) => {
                log::error!("Failed to save slot '{}': {}", self.slot, e);
                false
            }
        }
    }

    fn try_save(&self, list: &[EmployeeRecord]) -> Result<()> {
        let text = serde_json::to_string(list)?;
        self.backend.write_slot(&self.slot, &text)
    }

    /// True once the slot holds anything at all, readable or not.
    pub fn is_initialized(&self) -> bool {
        matches!(self.backend.read_slot(&self.slot), Ok(Some(text)) if !text.is_empty())
    }
}

pub fn find_by_key<'a>(list: &'a [EmployeeRecord], ec_no: &str) -> Option<&'a EmployeeRecord> {
    list.iter().find(|r| r.ec_no == ec_no)
}

pub fn find_by_index(list: &[EmployeeRecord], index: usize) -> Option<&EmployeeRecord> {
    list.get(index)
}

/// Parses an `index` lookup parameter. Anything but a non-negative integer is
/// not an index.
pub fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}
