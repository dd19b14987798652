use crate::commands::{CmdMessage, CmdResult};
use crate::error::{IprError, Result};
use crate::form::{RecordForm, RecordPatch};
use crate::index::{DisplayRecord, RecordSelector};
use crate::model::RecordFields;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::resolve_selector;

/// Replaces all editable fields of the selected record in one step.
/// Id, position and creation time are kept.
pub fn run<S: DataStore>(
    store: &mut S,
    selector: &RecordSelector,
    fields: RecordFields,
) -> Result<CmdResult> {
    let target = resolve_selector(store, selector)?;
    let mut record = target.record;
    record.replace_fields(fields);
    store.replace_record(&record)?;
    debug!(id = %record.id(), row = %target.index, "record updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        target.index, record.fields.title
    )));
    result.affected_records.push(DisplayRecord {
        index: target.index,
        record,
    });
    Ok(result)
}

/// Applies only the fields present in `patch`, then validates the result as a
/// whole before replacing.
pub fn patch<S: DataStore>(
    store: &mut S,
    selector: &RecordSelector,
    patch: &RecordPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(IprError::validation("update", "no fields given"));
    }

    let target = resolve_selector(store, selector)?;
    let mut form = RecordForm::from_record(&target.record);
    patch.apply_to(&mut form);
    let fields = form.validate()?;

    run(store, &RecordSelector::Id(target.record.id()), fields)
}
