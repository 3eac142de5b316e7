use super::SlotBackend;
use crate::error::{CardError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory slot storage for testing.
///
/// Uses `RefCell` for interior mutability since idcard is single-threaded,
/// which lets `SlotBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemSlot {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation (a full disk, a quota, a read-only mount).
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw slot contents, bypassing the record layer.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl SlotBackend for MemSlot {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CardError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
