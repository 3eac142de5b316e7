use crate::commands::{CmdMessage, CmdResult};
use crate::store::{RecordStore, SlotBackend};

/// Seeds the store if its slot has never been written.
pub fn run<B: SlotBackend>(store: &mut RecordStore<B>) -> CmdResult {
    let mut result = CmdResult::default();
    if store.is_initialized() {
        result.add_message(CmdMessage::info(format!(
            "Slot '{}' already holds data; nothing to do",
            store.slot()
        )));
        return result;
    }

    let seeded = store.load();
    if store.is_initialized() {
        result.add_message(CmdMessage::success(format!(
            "Initialized slot '{}' with {} records",
            store.slot(),
            seeded.len()
        )));
    } else {
        result.add_message(CmdMessage::error(format!(
            "Could not initialize slot '{}'",
            store.slot()
        )));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::EmployeeRecord;
    use crate::store::memory::MemSlot;

    fn store() -> RecordStore<MemSlot> {
        RecordStore::new(
            MemSlot::new(),
            "employees",
            vec![EmployeeRecord::new("S1", "Seed")],
        )
    }

    #[test]
    fn seeds_empty_slot_once() {
        let mut store = store();
        let first = run(&mut store);
        assert_eq!(first.messages[0].level, MessageLevel::Success);

        let second = run(&mut store);
        assert_eq!(second.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn reports_failed_seed_write() {
        let mut store = store();
        store.backend().set_simulate_write_error(true);
        assert!(run(&mut store).has_errors());
    }
}
