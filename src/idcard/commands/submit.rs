use crate::commands::{indexed, CmdMessage, CmdResult};
use crate::form::{FormController, FormMode, Navigation};
use crate::model::IndexedRecord;
use crate::store::{RecordStore, SlotBackend};

/// Submits the form, then lists the stored records (the list view is where a
/// submit navigates to).
pub fn run<B: SlotBackend>(form: FormController, store: &mut RecordStore<B>) -> CmdResult {
    let outcome = form.submit(store);
    let mut result = CmdResult::default();

    for warning in &outcome.warnings {
        result.add_message(CmdMessage::warning(warning.clone()));
    }

    if !outcome.persisted {
        result.add_message(CmdMessage::error(
            "Could not save employees; the stored list is unchanged",
        ));
        return result;
    }

    let verb = match outcome.mode {
        FormMode::Create => "added",
        FormMode::Edit { .. } => "updated",
    };
    result.add_message(CmdMessage::success(format!(
        "Employee {} ({}): {}",
        verb, outcome.index, outcome.record.name
    )));
    result.affected_records.push(IndexedRecord {
        index: outcome.index,
        record: outcome.record,
    });

    match outcome.navigation {
        Navigation::ListView => {
            let listed = store.current().map(<[_]>::to_vec).unwrap_or_default();
            result.with_listed_records(indexed(listed))
        }
    }
}
