use super::DataStore;
use crate::error::{IprError, Result};
use crate::model::{PatentRecord, RecordId};

/// In-memory record storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<PatentRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == *id)
            .ok_or_else(|| IprError::NotFound(format!("id {}", id)))
    }
}

impl DataStore for InMemoryStore {
    fn insert_record(&mut self, record: PatentRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn get_record(&self, id: &RecordId) -> Result<PatentRecord> {
        let pos = self.position(id)?;
        Ok(self.records[pos].clone())
    }

    fn replace_record(&mut self, record: &PatentRecord) -> Result<()> {
        let pos = self.position(&record.id())?;
        self.records[pos] = record.clone();
        Ok(())
    }

    fn delete_record(&mut self, id: &RecordId) -> Result<PatentRecord> {
        let pos = self.position(id)?;
        Ok(self.records.remove(pos))
    }

    fn records(&self) -> &[PatentRecord] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{RecordFields, Status};
    use chrono::NaiveDate;

    /// Fields for a plausible filing; tests override what they care about.
    pub fn sample_fields(title: &str, department: &str, status: Status) -> RecordFields {
        RecordFields {
            title: title.to_string(),
            applicant: "Dr. Test".to_string(),
            department: department.to_string(),
            filing_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            status,
            ipr_type: "Patent".to_string(),
            ipr_number: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = sample_fields(&format!("Filing {}", i + 1), "CS", Status::Draft);
                self.store.insert_record(PatentRecord::new(fields)).unwrap();
            }
            self
        }

        pub fn with_record(mut self, title: &str, department: &str, status: Status) -> Self {
            let fields = sample_fields(title, department, status);
            self.store.insert_record(PatentRecord::new(fields)).unwrap();
            self
        }

        pub fn ids(&self) -> Vec<RecordId> {
            self.store.records().iter().map(|r| r.id()).collect()
        }
    }
}
