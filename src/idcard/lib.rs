//! # idcard Architecture
//!
//! idcard keeps a small list of employee identity cards: a form creates and
//! edits them, a local store persists them, and a card view renders one for
//! printing. The core is UI-agnostic; the bundled CLI is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, returns structured CmdResult values         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - form submit, card lookup, listing, seeding, config       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: form.rs, card.rs, assets.rs, date.rs, model.rs       │
//! │  Storage: store/ (SlotBackend trait, FileSlot, MemSlot)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Identities
//!
//! The card view finds a record by its `ecNo`; the edit form finds it by its
//! position in the stored list. The two are never reconciled, see
//! [`store::find_by_key`] and [`store::find_by_index`].
//!
//! ## Degrade, Don't Fail
//!
//! Core operations do not return errors. Malformed dates become empty
//! strings, a corrupt store loads as an empty list (and is logged), a failed
//! save is reported as `false`, and a missing card renders a "not found"
//! model. [`error::CardError`] only surfaces at the edges: config files,
//! image files, and the image editor.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`form`]: Form state machine and record building
//! - [`card`]: Display model rendering
//! - [`assets`]: Photo and logo resolution
//! - [`date`]: ISO and display date conversion
//! - [`image`]: Image edit request/response boundary
//! - [`store`]: Persisted slot and record store
//! - [`model`]: The employee record
//! - [`config`]: Configuration and resolved defaults
//! - [`error`]: Error types

pub mod api;
pub mod assets;
pub mod card;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod form;
pub mod image;
pub mod model;
pub mod store;
