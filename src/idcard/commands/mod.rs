//! # Command Layer
//!
//! Each command lives in its own submodule and is a plain function over the
//! store and domain types. Commands return a [`CmdResult`] instead of
//! printing: records to list, a rendered card, configuration, and leveled
//! messages. Deciding how that looks on screen is the front-end's job.
//!
//! Tests here use [`crate::store::memory::MemSlot`] so no filesystem is needed.
//!
//! - [`list`]: List stored records with their positions
//! - [`submit`]: Submit a form and report the outcome
//! - [`image`]: Run an image slot through the image editor
//! - [`card`]: Render the card for an `ecNo`
//! - [`init`]: Seed an empty store
//! - [`config`]: Show and change configuration

use crate::card::DisplayModel;
use crate::config::CardConfig;
use crate::model::IndexedRecord;
use serde::Serialize;

pub mod card;
pub mod config;
pub mod image;
pub mod init;
pub mod list;
pub mod submit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<IndexedRecord>,
    pub listed_records: Vec<IndexedRecord>,
    pub card: Option<DisplayModel>,
    pub config: Option<CardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<IndexedRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_card(mut self, card: DisplayModel) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_config(mut self, config: CardConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

pub(crate) fn indexed(list: Vec<crate::model::EmployeeRecord>) -> Vec<IndexedRecord> {
    list.into_iter()
        .enumerate()
        .map(|(index, record)| IndexedRecord { index, record })
        .collect()
}
