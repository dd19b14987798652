//! # Command Layer
//!
//! The **business logic** of the record manager. Each operation lives in its own
//! submodule as a plain function over a [`DataStore`](crate::store::DataStore).
//!
//! Commands never print, never exit, and never prompt. They return a structured
//! [`CmdResult`] (or a view type such as
//! [`DepartmentSummary`](summary::DepartmentSummary)) and the UI decides how to
//! show it.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests run against
//! `InMemoryStore` via `StoreFixture` and check both the returned result and the
//! state left in the store.
//!
//! ## Command Modules
//!
//! - [`create`]: Append a new record
//! - [`update`]: Replace a record's fields in place, whole or patched
//! - [`delete`]: Remove a record
//! - [`edit`]: Prefill a form from a record (read-only)
//! - [`submit`]: Validate a form and create or update
//! - [`list`]: Produce the listing, optionally filtered
//! - [`view`]: Fetch a single record
//! - [`summary`]: Per-department status counts
//! - [`export`]: Write a JSON report of listing and summary
//! - [`helpers`]: Selector resolution shared by the above

use crate::index::DisplayRecord;
use serde::Serialize;
use std::path::PathBuf;

pub mod create;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod list;
pub mod submit;
pub mod summary;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
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

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed by the command.
    pub affected_records: Vec<DisplayRecord>,
    /// Records the command was asked to show.
    pub listed_records: Vec<DisplayRecord>,
    pub export_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    /// True when the command changed what is in the store.
    pub fn is_mutation(&self) -> bool {
        !self.affected_records.is_empty()
    }
}
