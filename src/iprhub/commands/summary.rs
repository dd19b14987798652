//! Per-department status counts.
//!
//! The summary is derived from the sequence every time it is asked for and is
//! never stored. Departments appear in the order their first record appears in
//! the sequence. Every status is always present in a group's counts, with zero
//! for statuses no record in that department has.

use crate::model::{PatentRecord, Status};
use crate::store::DataStore;
use serde::{Deserialize, Serialize};

/// How records are assigned to department groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentMatching {
    /// Byte-for-byte: "Physics" and "physics " are different departments.
    #[default]
    Exact,
    /// Trimmed and case-folded. The group is labelled with the first spelling seen.
    Normalized,
}

impl DepartmentMatching {
    fn key(&self, department: &str) -> String {
        match self {
            DepartmentMatching::Exact => department.to_string(),
            DepartmentMatching::Normalized => department.trim().to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusCounts {
    pub draft: usize,
    pub filed: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Draft => self.draft,
            Status::Filed => self.filed,
            Status::Approved => self.approved,
            Status::Rejected => self.rejected,
        }
    }

    pub fn increment(&mut self, status: Status) {
        let slot = match status {
            Status::Draft => &mut self.draft,
            Status::Filed => &mut self.filed,
            Status::Approved => &mut self.approved,
            Status::Rejected => &mut self.rejected,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        Status::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentStats {
    pub department: String,
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DepartmentSummary {
    departments: Vec<DepartmentStats>,
}

impl DepartmentSummary {
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DepartmentStats> {
        self.departments.iter()
    }

    pub fn get(&self, department: &str) -> Option<&StatusCounts> {
        self.departments
            .iter()
            .find(|d| d.department == department)
            .map(|d| &d.counts)
    }
}

/// Groups `records` by department and counts statuses within each group.
pub fn summarize<'a, I>(records: I, matching: DepartmentMatching) -> DepartmentSummary
where
    I: IntoIterator<Item = &'a PatentRecord>,
{
    let mut keys: Vec<String> = Vec::new();
    let mut departments: Vec<DepartmentStats> = Vec::new();

    for record in records {
        let key = matching.key(&record.fields.department);
        let slot = match keys.iter().position(|k| *k == key) {
            Some(pos) => pos,
            None => {
                keys.push(key);
                departments.push(DepartmentStats {
                    department: record.fields.department.clone(),
                    counts: StatusCounts::default(),
                });
                departments.len() - 1
            }
        };
        departments[slot].counts.increment(record.fields.status);
    }

    DepartmentSummary { departments }
}

pub fn run<S: DataStore>(store: &S, matching: DepartmentMatching) -> DepartmentSummary {
    summarize(store.records(), matching)
}
