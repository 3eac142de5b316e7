use crate::commands::{indexed, CmdMessage, CmdResult};
use crate::store::{RecordStore, SlotBackend};

pub fn run<B: SlotBackend>(store: &mut RecordStore<B>) -> CmdResult {
    let records = indexed(store.load());
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No employees found."));
    }
    result.with_listed_records(records)
}
