//! # API Facade
//!
//! The single entry point for idcard operations, whatever the front-end. It
//! dispatches to `commands/*.rs` and returns structured [`CmdResult`]s; it
//! neither prints nor holds business logic.
//!
//! `CardApi<B: SlotBackend>` is generic over the slot backend:
//! - Production: `CardApi<FileSlot>`
//! - Testing: `CardApi<MemSlot>`
//!
//! Construction follows the initialization order: a [`CardConfig`] is turned
//! into [`Defaults`], which seed the [`RecordStore`] and provide the card
//! globals.

use crate::card::CardGlobals;
use crate::commands;
use crate::commands::config::ConfigAction;
use crate::commands::CmdResult;
use crate::config::{CardConfig, Defaults};
use crate::error::Result;
use crate::form::FormController;
use crate::image::{ImageEditor, ImageSlot, SourceImage, SquareCropEditor};
use crate::store::{RecordStore, SlotBackend};
use std::path::PathBuf;

pub struct CardApi<B: SlotBackend> {
    store: RecordStore<B>,
    globals: CardGlobals,
    editor: Box<dyn ImageEditor>,
    config_dir: PathBuf,
}

impl<B: SlotBackend> CardApi<B> {
    pub fn new(backend: B, config: &CardConfig, defaults: Defaults, config_dir: PathBuf) -> Self {
        let globals = CardGlobals::from(&defaults);
        Self {
            store: RecordStore::new(backend, config.slot.clone(), defaults.seed),
            globals,
            editor: Box::new(SquareCropEditor),
            config_dir,
        }
    }

    pub fn with_editor(mut self, editor: Box<dyn ImageEditor>) -> Self {
        self.editor = editor;
        self
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn list(&mut self) -> CmdResult {
        commands::list::run(&mut self.store)
    }

    /// Opens the employee form. `index` selects Edit mode when it resolves.
    pub fn open_form(&mut self, index: Option<&str>) -> FormController {
        FormController::open(self.store.load(), index)
    }

    pub fn load_image(
        &self,
        form: &mut FormController,
        slot: ImageSlot,
        source: SourceImage,
    ) -> Result<CmdResult> {
        commands::image::run(self.editor.as_ref(), form, slot, source)
    }

    pub fn submit_form(&mut self, form: FormController) -> CmdResult {
        commands::submit::run(form, &mut self.store)
    }

    pub fn card(&mut self, ec_no: &str) -> CmdResult {
        commands::card::run(&mut self.store, &self.globals, ec_no)
    }

    pub fn init(&mut self) -> CmdResult {
        commands::init::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
