use crate::card::{render_by_key, CardGlobals};
use crate::commands::{CmdMessage, CmdResult};
use crate::store::{RecordStore, SlotBackend};

pub fn run<B: SlotBackend>(
    store: &mut RecordStore<B>,
    globals: &CardGlobals,
    ec_no: &str,
) -> CmdResult {
    let list = store.load();
    let model = render_by_key(&list, ec_no, globals);
    let mut result = CmdResult::default();
    if model.card().is_none() {
        log::debug!("No employee with EC No {:?}", ec_no);
        result.add_message(CmdMessage::warning(format!("No employee with EC No {}", ec_no)));
    }
    result.with_card(model)
}
