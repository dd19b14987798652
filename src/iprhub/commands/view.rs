use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RecordSelector;
use crate::store::DataStore;

use super::helpers::resolve_selector;

pub fn run<S: DataStore>(store: &S, selector: &RecordSelector) -> Result<CmdResult> {
    let record = resolve_selector(store, selector)?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}
