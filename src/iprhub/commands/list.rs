use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{Listing, Row};
use crate::model::Status;
use crate::store::DataStore;

/// Narrows a listing. Rows keep the numbers they have in the full listing, so
/// "delete 4" means the same record whether or not a filter was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub status: Option<Status>,
    /// Exact match, same as summary grouping.
    pub department: Option<String>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.department.is_none()
    }

    pub fn matches(&self, row: &Row<'_>) -> bool {
        let fields = &row.record.fields;
        self.status.is_none_or(|s| fields.status == s)
            && self
                .department
                .as_deref()
                .is_none_or(|d| fields.department == d)
    }
}

/// The full, unfiltered listing as a lazy view.
pub fn listing<S: DataStore>(store: &S) -> Listing<'_> {
    Listing::new(store.records())
}

pub fn run<S: DataStore>(store: &S, filter: &RecordFilter) -> Result<CmdResult> {
    let rows = listing(store)
        .iter()
        .filter(|row| filter.matches(row))
        .map(|row| row.to_display_record())
        .collect();
    Ok(CmdResult::default().with_listed_records(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_record("A", "CS", Status::Draft)
            .with_record("B", "EE", Status::Filed)
            .with_record("C", "CS", Status::Filed)
    }

    #[test]
    fn lists_everything_in_order() {
        let fixture = fixture();
        let result = run(&fixture.store, &RecordFilter::default()).unwrap();

        let titles: Vec<_> = result
            .listed_records
            .iter()
            .map(|dr| dr.record.fields.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn filter_keeps_canonical_row_numbers() {
        let fixture = fixture();
        let filter = RecordFilter {
            status: Some(Status::Filed),
            department: Some("CS".into()),
        };
        let result = run(&fixture.store, &filter).unwrap();

        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].index, DisplayIndex(3));
        assert_eq!(result.listed_records[0].record.fields.title, "C");
    }

    #[test]
    fn listing_twice_is_identical() {
        let fixture = fixture();
        let first: Vec<_> = listing(&fixture.store)
            .iter()
            .map(|r| (r.index, r.record.id()))
            .collect();
        let second: Vec<_> = listing(&fixture.store)
            .iter()
            .map(|r| (r.index, r.record.id()))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let fixture = StoreFixture::new();
        assert!(listing(&fixture.store).is_empty());
        let result = run(&fixture.store, &RecordFilter::default()).unwrap();
        assert!(result.listed_records.is_empty());
    }
}
