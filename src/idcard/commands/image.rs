use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::FormController;
use crate::image::{ImageEditor, ImageSlot, SourceImage};

/// Sends `source` through `editor` and stores the result in `slot`.
///
/// On failure the edit is cancelled and the slot keeps its previous value.
pub fn run<E: ImageEditor + ?Sized>(
    editor: &E,
    form: &mut FormController,
    slot: ImageSlot,
    source: SourceImage,
) -> Result<CmdResult> {
    let name = source.name.clone();
    let request = form.request_image_edit(slot, source);
    let edited = match editor.edit(&request) {
        Ok(edited) => edited,
        Err(e) => {
            form.cancel_image_edit();
            return Err(e);
        }
    };

    let mut result = CmdResult::default();
    if form.complete_image_edit(edited) {
        let label = match name {
            Some(name) => format!("{} selected: {}", capitalize(&slot.to_string()), name),
            None => format!("{} selected", capitalize(&slot.to_string())),
        };
        result.add_message(CmdMessage::info(label));
    }
    Ok(result)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
