use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayRecord, RecordSelector};
use crate::store::DataStore;
use tracing::debug;

use super::helpers::resolve_selector;

pub fn run<S: DataStore>(store: &mut S, selector: &RecordSelector) -> Result<CmdResult> {
    let target = resolve_selector(store, selector)?;
    let record = store.delete_record(&target.record.id())?;
    debug!(id = %record.id(), row = %target.index, "record deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record deleted ({}): {}",
        target.index, record.fields.title
    )));
    result.affected_records.push(DisplayRecord {
        index: target.index,
        record,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IprError;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_exactly_one_and_keeps_order() {
        let mut fixture = StoreFixture::new().with_records(4);
        let ids = fixture.ids();

        run(&mut fixture.store, &RecordSelector::Index(DisplayIndex(2))).unwrap();

        assert_eq!(fixture.ids(), vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn delete_by_id() {
        let mut fixture = StoreFixture::new().with_records(3);
        let ids = fixture.ids();

        let result = run(&mut fixture.store, &RecordSelector::Id(ids[2])).unwrap();

        assert_eq!(result.affected_records[0].index, DisplayIndex(3));
        assert_eq!(fixture.ids(), vec![ids[0], ids[1]]);
    }

    #[test]
    fn out_of_range_is_not_found_and_store_unchanged() {
        let mut fixture = StoreFixture::new().with_records(2);
        let ids = fixture.ids();

        let err = run(&mut fixture.store, &RecordSelector::Index(DisplayIndex(3))).unwrap_err();

        assert!(matches!(err, IprError::NotFound(_)));
        assert_eq!(fixture.ids(), ids);
    }

    #[test]
    fn deleting_twice_by_id_fails_the_second_time() {
        let mut fixture = StoreFixture::new().with_records(2);
        let first = fixture.ids()[0];

        run(&mut fixture.store, &RecordSelector::Id(first)).unwrap();
        let err = run(&mut fixture.store, &RecordSelector::Id(first)).unwrap_err();

        assert!(matches!(err, IprError::NotFound(_)));
        assert_eq!(fixture.store.records().len(), 1);
    }
}
