use crate::commands::{create, update, CmdResult};
use crate::error::Result;
use crate::form::RecordForm;
use crate::index::RecordSelector;
use crate::store::DataStore;
use tracing::warn;

/// Submits a filled form. A form bound to a record updates it in place; an
/// unbound form creates a new record. Nothing is stored if validation fails.
pub fn run<S: DataStore>(store: &mut S, form: &RecordForm) -> Result<CmdResult> {
    let fields = form.validate().inspect_err(|e| {
        warn!(error = %e, "form rejected");
    })?;

    match form.editing {
        Some(id) => update::run(store, &RecordSelector::Id(id), fields),
        None => create::run(store, fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::edit;
    use crate::error::IprError;
    use crate::form::FormField;
    use crate::index::DisplayIndex;
    use crate::model::Status;
    use crate::store::memory::fixtures::StoreFixture;

    fn new_form(title: &str) -> RecordForm {
        let mut form = RecordForm::new();
        form.set(FormField::Title, title);
        form.set(FormField::Applicant, "Dr. Okafor");
        form.set(FormField::Department, "EE");
        form.set(FormField::FilingDate, "2023-11-02");
        form.set(FormField::Status, "Draft");
        form.set(FormField::Type, "Trademark");
        form
    }

    #[test]
    fn unbound_form_creates() {
        let mut fixture = StoreFixture::new().with_records(1);
        run(&mut fixture.store, &new_form("Logo")).unwrap();

        let records = fixture.store.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].fields.title, "Logo");
    }

    #[test]
    fn edited_form_updates_in_place() {
        let mut fixture = StoreFixture::new().with_records(3);
        let ids = fixture.ids();

        let mut form = edit::run(&fixture.store, &RecordSelector::Index(DisplayIndex(1))).unwrap();
        form.set(FormField::Status, "Approved");
        let result = run(&mut fixture.store, &form).unwrap();

        assert_eq!(fixture.ids(), ids);
        assert_eq!(fixture.store.records()[0].fields.status, Status::Approved);
        assert_eq!(result.affected_records[0].index, DisplayIndex(1));
    }

    #[test]
    fn edited_record_deleted_meanwhile_is_not_found() {
        let mut fixture = StoreFixture::new().with_records(2);
        let form = edit::run(&fixture.store, &RecordSelector::Index(DisplayIndex(2))).unwrap();
        crate::commands::delete::run(&mut fixture.store, &RecordSelector::Index(DisplayIndex(2)))
            .unwrap();

        let err = run(&mut fixture.store, &form).unwrap_err();
        assert!(matches!(err, IprError::NotFound(_)));
        assert_eq!(fixture.store.records().len(), 1);
    }

    #[test]
    fn invalid_form_stores_nothing() {
        let mut fixture = StoreFixture::new();
        let mut form = new_form("Logo");
        form.set(FormField::Status, "Unknown");

        let err = run(&mut fixture.store, &form).unwrap_err();
        assert!(matches!(err, IprError::InvalidStatus(_)));
        assert!(fixture.store.records().is_empty());
    }
}
