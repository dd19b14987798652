//! # Storage Layer
//!
//! The [`DataStore`] trait keeps the command layer independent of where records
//! live. There is one implementation, [`memory::InMemoryStore`]: records exist
//! for as long as the store value does and are gone when it is dropped.
//!
//! ## Ordering
//!
//! A store is an **ordered** sequence. New records go to the end, updates keep
//! their slot, and deletes close the gap without reordering anything else. Row
//! numbers shown to users are positions in this sequence (see `index.rs`).

use crate::error::Result;
use crate::model::{PatentRecord, RecordId};

pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Append a new record to the end of the sequence.
    fn insert_record(&mut self, record: PatentRecord) -> Result<()>;

    /// Get a record by id.
    fn get_record(&self, id: &RecordId) -> Result<PatentRecord>;

    /// Overwrite the stored record with the same id, keeping its position.
    fn replace_record(&mut self, record: &PatentRecord) -> Result<()>;

    /// Remove a record, returning it.
    fn delete_record(&mut self, id: &RecordId) -> Result<PatentRecord>;

    /// All records in sequence order.
    fn records(&self) -> &[PatentRecord];
}
