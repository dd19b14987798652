use crate::commands::summary::{self, DepartmentMatching, DepartmentSummary};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PatentRecord;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub row: usize,
    #[serde(flatten)]
    pub record: &'a PatentRecord,
}

/// Snapshot of the listing and the summary. Written out, never read back.
#[derive(Debug, Serialize)]
pub struct ExportReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub records: Vec<ExportRow<'a>>,
    pub summary: DepartmentSummary,
    /// Filings per calendar year of `filing_date`, oldest first.
    pub by_year: BTreeMap<i32, usize>,
}

pub fn build<S: DataStore>(store: &S, matching: DepartmentMatching) -> ExportReport<'_> {
    let records = super::list::listing(store)
        .iter()
        .map(|row| ExportRow {
            row: row.index.0,
            record: row.record,
        })
        .collect();

    ExportReport {
        generated_at: Utc::now(),
        records,
        summary: summary::run(store, matching),
        by_year: filings_by_year(store.records()),
    }
}

fn filings_by_year(records: &[PatentRecord]) -> BTreeMap<i32, usize> {
    let mut years = BTreeMap::new();
    for record in records {
        *years.entry(record.fields.filing_date.year()).or_insert(0) += 1;
    }
    years
}

pub fn run<S: DataStore>(
    store: &S,
    path: &Path,
    matching: DepartmentMatching,
) -> Result<CmdResult> {
    let report = build(store, matching);
    let json = serde_json::to_string_pretty(&report)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    debug!(path = %path.display(), records = report.records.len(), "report exported");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} record(s) in {} department(s) to {}",
        report.records.len(),
        report.summary.len(),
        path.display()
    )));
    result.export_paths.push(path.to_path_buf());
    Ok(result)
}
