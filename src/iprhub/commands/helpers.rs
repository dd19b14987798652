use crate::error::Result;
use crate::index::{self, DisplayRecord, RecordSelector};
use crate::store::DataStore;

/// Resolves a selector against the store's current sequence.
pub fn resolve_selector<S: DataStore>(
    store: &S,
    selector: &RecordSelector,
) -> Result<DisplayRecord> {
    index::resolve(store.records(), selector)
}
