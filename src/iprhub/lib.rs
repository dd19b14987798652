//! # IPR Hub Architecture
//!
//! IPR Hub is a **UI-agnostic record store** for intellectual property filings.
//! The terminal session shipped in this crate is one client of the library,
//! not the application itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads session lines, renders listing and summary         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Form (form.rs)                        │
//! │  - Resolves row numbers to stable record ids                │
//! │  - Validates form input into record fields                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns structured results          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Every record gets a [`model::RecordId`] when it is created and keeps it for
//! life. Users still talk in row numbers ("delete 2"); those are
//! [`index::DisplayIndex`] values, resolved against the current listing at the
//! moment the command runs. See `index.rs`.
//!
//! ## No Persistence
//!
//! Records live only as long as the store value that owns them. Export writes a
//! report; nothing ever reads one back.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`PatentRecord`, `RecordFields`, `Status`)
//! - [`form`]: Input form model and validation
//! - [`index`]: Display row numbers and record selectors
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod index;
pub mod model;
pub mod store;
