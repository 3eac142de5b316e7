//! # CLI Layer
//!
//! One possible front-end for idcard. It is the only place that parses
//! arguments, touches stdout/stderr, or decides exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and per-command handlers
//! - `print`: terminal output for `CmdResult` contents

pub mod commands;
pub mod print;
pub mod setup;
