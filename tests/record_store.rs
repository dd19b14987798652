use chrono::NaiveDate;
use iprhub::api::IprApi;
use iprhub::error::IprError;
use iprhub::form::{FormField, RecordForm, RecordPatch};
use iprhub::model::{RecordFields, Status};
use iprhub::store::memory::InMemoryStore;
use iprhub::store::DataStore;

fn fields(title: &str, department: &str, status: Status) -> RecordFields {
    RecordFields {
        title: title.to_string(),
        applicant: "Dr. Okafor".to_string(),
        department: department.to_string(),
        filing_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        status,
        ipr_type: "Trademark".to_string(),
        ipr_number: None,
    }
}

fn seeded() -> IprApi<InMemoryStore> {
    let mut api = IprApi::new(InMemoryStore::new());
    for (title, dept, status) in [
        ("Alpha", "CS", Status::Draft),
        ("Beta", "EE", Status::Filed),
        ("Gamma", "CS", Status::Rejected),
    ] {
        api.create_record(fields(title, dept, status)).unwrap();
    }
    api
}

#[test]
fn listing_can_be_walked_twice() {
    let api = seeded();
    let listing = api.listing();

    let first: Vec<_> = listing.iter().map(|r| r.index.0).collect();
    let second: Vec<_> = listing.iter().map(|r| r.index.0).collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(first, second);
}

#[test]
fn id_selector_survives_renumbering() {
    let mut api = seeded();
    let gamma = api.store().records()[2].id();

    api.delete_record("1").unwrap();
    let shown = api.view_record(&gamma.to_string()).unwrap();

    assert_eq!(shown.listed_records[0].index.0, 2);
    assert_eq!(shown.listed_records[0].record.fields.title, "Gamma");
}

#[test]
fn abandoned_edit_changes_nothing() {
    let api = seeded();
    let before = api.store().records().to_vec();

    let mut form = api.edit_record("2").unwrap();
    form.set(FormField::Title, "Beta Prime");
    drop(form);

    assert_eq!(api.store().records(), before.as_slice());
}

#[test]
fn patch_touches_only_given_fields() {
    let mut api = seeded();
    let patch = RecordPatch {
        status: Some("approved".to_string()),
        ipr_number: Some("TM-2024-0042".to_string()),
        ..RecordPatch::default()
    };
    api.patch_record("2", &patch).unwrap();

    let beta = &api.store().records()[1].fields;
    assert_eq!(beta.title, "Beta");
    assert_eq!(beta.status, Status::Approved);
    assert_eq!(beta.ipr_number.as_deref(), Some("TM-2024-0042"));
}

#[test]
fn new_form_submission_appends() {
    let mut api = seeded();
    let mut form = RecordForm::new();
    form.set(FormField::Title, "Delta");
    form.set(FormField::Applicant, "Dr. Ng");
    form.set(FormField::Department, "ME");
    form.set(FormField::FilingDate, "2023-08-15");
    form.set(FormField::Status, "Filed");
    form.set(FormField::Type, "Patent");

    let result = api.submit_form(&form).unwrap();
    assert_eq!(result.affected_records[0].index.0, 4);
    assert_eq!(api.summary().len(), 3);
}

#[test]
fn bad_date_is_rejected_without_side_effects() {
    let mut api = seeded();
    let patch = RecordPatch {
        filing_date: Some("29/02/2024".to_string()),
        ..RecordPatch::default()
    };

    assert!(matches!(
        api.patch_record("1", &patch),
        Err(IprError::ValidationFailed {
            field: "filing_date",
            ..
        })
    ));
    assert_eq!(
        api.store().records()[0].fields.filing_date,
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
}

#[test]
fn full_update_keeps_identity_and_position() {
    let mut api = seeded();
    let original = api.store().records()[1].clone();

    api.update_record("2", fields("Beta II", "ME", Status::Approved)).unwrap();

    let updated = &api.store().records()[1];
    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.metadata.created_at, original.metadata.created_at);
    assert_eq!(updated.fields.title, "Beta II");
    assert_eq!(api.summary().get("ME").unwrap().approved, 1);
}
