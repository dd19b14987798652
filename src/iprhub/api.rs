//! # API Facade
//!
//! The single entry point for record operations, whatever the UI. It dispatches
//! to `commands/*`, turns user-facing selectors ("2", a UUID) into
//! [`RecordSelector`]s, and returns structured results. No business logic and no
//! I/O beyond what a command itself does (export).
//!
//! `IprApi<S: DataStore>` owns its store. There is no global record list: a UI
//! constructs one API value and passes it to whatever needs it.

use crate::commands::{
    self,
    list::RecordFilter,
    summary::{DepartmentMatching, DepartmentSummary},
};
use crate::error::Result;
use crate::form::{RecordForm, RecordPatch};
use crate::index::{Listing, RecordSelector};
use crate::model::RecordFields;
use crate::store::DataStore;
use std::path::Path;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for record operations.
pub struct IprApi<S: DataStore> {
    store: S,
    matching: DepartmentMatching,
}

impl<S: DataStore> IprApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            matching: DepartmentMatching::default(),
        }
    }

    pub fn with_department_matching(mut self, matching: DepartmentMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn create_record(&mut self, fields: RecordFields) -> Result<CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn update_record(&mut self, selector: &str, fields: RecordFields) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        commands::update::run(&mut self.store, &selector, fields)
    }

    pub fn patch_record(&mut self, selector: &str, patch: &RecordPatch) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        commands::update::patch(&mut self.store, &selector, patch)
    }

    pub fn delete_record(&mut self, selector: &str) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        commands::delete::run(&mut self.store, &selector)
    }

    /// Prefills a form for editing; the record is left untouched.
    pub fn edit_record(&self, selector: &str) -> Result<RecordForm> {
        let selector = parse_selector(selector)?;
        commands::edit::run(&self.store, &selector)
    }

    pub fn submit_form(&mut self, form: &RecordForm) -> Result<CmdResult> {
        commands::submit::run(&mut self.store, form)
    }

    pub fn view_record(&self, selector: &str) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        commands::view::run(&self.store, &selector)
    }

    pub fn list_records(&self, filter: &RecordFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    /// Lazy listing over the current sequence.
    pub fn listing(&self) -> Listing<'_> {
        commands::list::listing(&self.store)
    }

    pub fn summary(&self) -> DepartmentSummary {
        commands::summary::run(&self.store, self.matching)
    }

    pub fn export_report(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, path, self.matching)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_selector(input: &str) -> Result<RecordSelector> {
    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IprError;
    use crate::form::FormField;
    use crate::model::Status;
    use crate::store::memory::fixtures::sample_fields;
    use crate::store::memory::InMemoryStore;

    fn api() -> IprApi<InMemoryStore> {
        IprApi::new(InMemoryStore::new())
    }

    #[test]
    fn create_then_list() {
        let mut api = api();
        api.create_record(sample_fields("A", "CS", Status::Draft)).unwrap();

        let listing = api.listing();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.iter().next().unwrap().record.fields.title, "A");
    }

    #[test]
    fn selectors_accept_rows_and_ids() {
        let mut api = api();
        let created = api.create_record(sample_fields("A", "CS", Status::Draft)).unwrap();
        let id = created.affected_records[0].record.id();

        let by_row = api.view_record("1").unwrap();
        let by_id = api.view_record(&id.to_string()).unwrap();
        assert_eq!(
            by_row.listed_records[0].record.id(),
            by_id.listed_records[0].record.id()
        );
    }

    #[test]
    fn bad_selector_is_validation_error() {
        let mut api = api();
        assert!(matches!(
            api.delete_record("first"),
            Err(IprError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn three_record_summary_scenario() {
        let mut api = api();
        api.create_record(sample_fields("1", "CS", Status::Draft)).unwrap();
        api.create_record(sample_fields("2", "CS", Status::Filed)).unwrap();
        api.create_record(sample_fields("3", "EE", Status::Draft)).unwrap();

        let summary = api.summary();
        let cs = summary.get("CS").unwrap();
        assert_eq!((cs.draft, cs.filed, cs.approved, cs.rejected), (1, 1, 0, 0));
        let ee = summary.get("EE").unwrap();
        assert_eq!((ee.draft, ee.filed, ee.approved, ee.rejected), (1, 0, 0, 0));
    }

    #[test]
    fn edit_then_submit_replaces_in_place() {
        let mut api = api();
        for title in ["A", "B", "C"] {
            api.create_record(sample_fields(title, "CS", Status::Draft)).unwrap();
        }

        let mut form = api.edit_record("2").unwrap();
        assert_eq!(api.listing().len(), 3);

        form.set(FormField::Title, "B2");
        api.submit_form(&form).unwrap();

        let titles: Vec<_> = api
            .listing()
            .iter()
            .map(|r| r.record.fields.title.clone())
            .collect();
        assert_eq!(titles, vec!["A", "B2", "C"]);
    }

    #[test]
    fn normalized_matching_is_used_by_summary() {
        let mut api = api().with_department_matching(DepartmentMatching::Normalized);
        api.create_record(sample_fields("1", "Physics", Status::Draft)).unwrap();
        api.create_record(sample_fields("2", "physics", Status::Draft)).unwrap();
        assert_eq!(api.summary().len(), 1);
    }
}
