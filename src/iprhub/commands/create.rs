use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayRecord};
use crate::model::{PatentRecord, RecordFields};
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, fields: RecordFields) -> Result<CmdResult> {
    let record = PatentRecord::new(fields);
    store.insert_record(record.clone())?;

    // Appended, so it is always the last row
    let index = DisplayIndex(store.records().len());
    debug!(id = %record.id(), row = %index, "record created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record created ({}): {}",
        index, record.fields.title
    )));
    result.affected_records.push(DisplayRecord { index, record });
    Ok(result)
}
