//! # Display Indexes
//!
//! Records are identified by [`RecordId`] internally, but people pick rows off a
//! table: "edit 2", "delete 5". A [`DisplayIndex`] is that 1-based row number.
//!
//! Row numbers are **not** stored. They are derived from the current sequence
//! every time a listing is produced, and a selector is resolved to an id at the
//! moment a command runs. Once resolved, the command works on the id alone, so a
//! stale row number can only fail with `NotFound`; it never hits a neighbour.

use crate::error::{IprError, Result};
use crate::model::{PatentRecord, RecordId};
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based row number in the current listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    /// Zero-based position in the underlying sequence.
    pub fn position(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }

    fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a command names the record it should act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Index(DisplayIndex),
    Id(RecordId),
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelector::Index(idx) => write!(f, "row {}", idx),
            RecordSelector::Id(id) => write!(f, "id {}", id),
        }
    }
}

impl FromStr for RecordSelector {
    type Err = IprError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            let n: usize = s
                .parse()
                .map_err(|_| IprError::validation("selector", format!("'{}' is too large", s)))?;
            if n == 0 {
                return Err(IprError::validation("selector", "row numbers start at 1"));
            }
            return Ok(RecordSelector::Index(DisplayIndex(n)));
        }

        s.parse::<RecordId>().map(RecordSelector::Id).map_err(|_| {
            IprError::validation(
                "selector",
                format!("'{}' is neither a row number nor a record id", s),
            )
        })
    }
}

/// A record paired with the row number it had when the result was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: DisplayIndex,
    pub record: PatentRecord,
}

/// One row of a [`Listing`], borrowed from the store.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub index: DisplayIndex,
    pub record: &'a PatentRecord,
}

impl Row<'_> {
    pub fn to_display_record(&self) -> DisplayRecord {
        DisplayRecord {
            index: self.index,
            record: self.record.clone(),
        }
    }
}

/// Lazy view over the current sequence. Iterating never consumes it, so the
/// same listing can be walked as often as needed.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    records: &'a [PatentRecord],
}

impl<'a> Listing<'a> {
    pub fn new(records: &'a [PatentRecord]) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> impl Iterator<Item = Row<'a>> + Clone + 'a {
        let records: &'a [PatentRecord] = self.records;
        records
            .iter()
            .enumerate()
            .map(|(position, record)| Row {
                index: DisplayIndex::from_position(position),
                record,
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for Listing<'a> {
    type Item = Row<'a>;
    type IntoIter = Box<dyn Iterator<Item = Row<'a>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Finds the record a selector points at in `records`.
pub fn resolve(records: &[PatentRecord], selector: &RecordSelector) -> Result<DisplayRecord> {
    let found = match selector {
        RecordSelector::Index(idx) => idx
            .position()
            .and_then(|pos| records.get(pos).map(|record| (pos, record))),
        RecordSelector::Id(id) => records
            .iter()
            .enumerate()
            .find(|(_, record)| record.id() == *id),
    };

    found
        .map(|(position, record)| DisplayRecord {
            index: DisplayIndex::from_position(position),
            record: record.clone(),
        })
        .ok_or_else(|| match selector {
            RecordSelector::Index(idx) => IprError::NotFound(format!(
                "row {} (listing has {} row{})",
                idx,
                records.len(),
                if records.len() == 1 { "" } else { "s" }
            )),
            RecordSelector::Id(id) => IprError::NotFound(format!("id {}", id)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecordFields, Status};
    use chrono::NaiveDate;

    fn make_record(title: &str) -> PatentRecord {
        PatentRecord::new(RecordFields {
            title: title.to_string(),
            applicant: "Applicant".into(),
            department: "CS".into(),
            filing_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: Status::Draft,
            ipr_type: "Patent".into(),
            ipr_number: None,
        })
    }

    #[test]
    fn listing_numbers_rows_from_one_in_order() {
        let records = vec![make_record("A"), make_record("B"), make_record("C")];
        let listing = Listing::new(&records);

        let rows: Vec<_> = listing
            .iter()
            .map(|row| (row.index.0, row.record.fields.title.as_str()))
            .collect();
        assert_eq!(rows, vec![(1, "A"), (2, "B"), (3, "C")]);
    }

    #[test]
    fn listing_can_be_walked_twice() {
        let records = vec![make_record("A"), make_record("B")];
        let listing = Listing::new(&records);

        let first: Vec<_> = listing.iter().map(|r| r.record.id()).collect();
        let second: Vec<_> = listing.into_iter().map(|r| r.record.id()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn selector_parses_rows_and_ids() {
        assert_eq!(
            "3".parse::<RecordSelector>().unwrap(),
            RecordSelector::Index(DisplayIndex(3))
        );

        let id = RecordId::new();
        assert_eq!(
            id.to_string().parse::<RecordSelector>().unwrap(),
            RecordSelector::Id(id)
        );
    }

    #[test]
    fn selector_rejects_zero_and_garbage() {
        assert!(matches!(
            "0".parse::<RecordSelector>(),
            Err(IprError::ValidationFailed { field: "selector", .. })
        ));
        assert!(matches!(
            "abc".parse::<RecordSelector>(),
            Err(IprError::ValidationFailed { field: "selector", .. })
        ));
    }

    #[test]
    fn resolve_by_index_and_by_id() {
        let records = vec![make_record("A"), make_record("B")];
        let second_id = records[1].id();

        let by_index = resolve(&records, &RecordSelector::Index(DisplayIndex(2))).unwrap();
        assert_eq!(by_index.record.id(), second_id);

        let by_id = resolve(&records, &RecordSelector::Id(second_id)).unwrap();
        assert_eq!(by_id.index, DisplayIndex(2));
    }

    #[test]
    fn resolve_out_of_range_is_not_found() {
        let records = vec![make_record("A")];
        let err = resolve(&records, &RecordSelector::Index(DisplayIndex(2))).unwrap_err();
        assert!(matches!(err, IprError::NotFound(_)));

        let err = resolve(&records, &RecordSelector::Id(RecordId::new())).unwrap_err();
        assert!(matches!(err, IprError::NotFound(_)));
    }
}
