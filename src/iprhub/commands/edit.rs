use crate::error::Result;
use crate::form::RecordForm;
use crate::index::RecordSelector;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::resolve_selector;

/// Prefills a form from the selected record. The store is not touched: the
/// record stays in place until the form is submitted.
pub fn run<S: DataStore>(store: &S, selector: &RecordSelector) -> Result<RecordForm> {
    let target = resolve_selector(store, selector)?;
    debug!(id = %target.record.id(), row = %target.index, "editing record");
    Ok(RecordForm::from_record(&target.record))
}
