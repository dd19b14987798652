//! # Filing Form
//!
//! [`RecordForm`] is the input side of the record manager: raw text for every
//! field, exactly as the user typed it, plus an optional binding to the record
//! being edited. Nothing here touches the store.
//!
//! Prefilling a form from an existing record ([`RecordForm::from_record`]) is
//! how "edit" works. The record stays where it is until the form is submitted,
//! and a submitted form bound to an id replaces that record in place.
//!
//! [`RecordPatch`] is the one-shot variant: only the fields that were given are
//! laid over the current values before validation.

use crate::error::{IprError, Result};
use crate::model::{PatentRecord, RecordFields, RecordId, Status};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Applicant,
    Department,
    FilingDate,
    Status,
    Type,
    Number,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Title,
        FormField::Applicant,
        FormField::Department,
        FormField::FilingDate,
        FormField::Status,
        FormField::Type,
        FormField::Number,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Applicant => "applicant",
            FormField::Department => "department",
            FormField::FilingDate => "filing_date",
            FormField::Status => "status",
            FormField::Type => "type",
            FormField::Number => "number",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = IprError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "title" => Ok(FormField::Title),
            "applicant" => Ok(FormField::Applicant),
            "department" | "dept" => Ok(FormField::Department),
            "filing_date" | "date" => Ok(FormField::FilingDate),
            "status" => Ok(FormField::Status),
            "type" | "ipr_type" => Ok(FormField::Type),
            "number" | "ipr_number" => Ok(FormField::Number),
            _ => Err(IprError::validation(
                "field",
                format!(
                    "unknown field '{}' (expected one of: {})",
                    s,
                    FormField::ALL.map(|f| f.name()).join(", ")
                ),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordForm {
    /// Set when the form was prefilled from an existing record.
    pub editing: Option<RecordId>,
    pub title: Option<String>,
    pub applicant: Option<String>,
    pub department: Option<String>,
    pub filing_date: Option<String>,
    pub status: Option<String>,
    pub ipr_type: Option<String>,
    pub ipr_number: Option<String>,
}

impl RecordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: &PatentRecord) -> Self {
        let fields = &record.fields;
        Self {
            editing: Some(record.id()),
            title: Some(fields.title.clone()),
            applicant: Some(fields.applicant.clone()),
            department: Some(fields.department.clone()),
            filing_date: Some(fields.filing_date.format(DATE_FORMAT).to_string()),
            status: Some(fields.status.to_string()),
            ipr_type: Some(fields.ipr_type.clone()),
            ipr_number: fields.ipr_number.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Turns the raw input into record fields.
    ///
    /// Values are kept as typed; surrounding whitespace only matters for the
    /// emptiness check. An empty number means "no number yet".
    pub fn validate(&self) -> Result<RecordFields> {
        let title = self.required(FormField::Title)?;
        let applicant = self.required(FormField::Applicant)?;
        let department = self.required(FormField::Department)?;
        let filing_date = parse_date(self.required(FormField::FilingDate)?)?;
        let status: Status = self.required(FormField::Status)?.parse()?;
        let ipr_type = self.required(FormField::Type)?;
        let ipr_number = self
            .ipr_number
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .map(str::to_string);

        Ok(RecordFields {
            title: title.to_string(),
            applicant: applicant.to_string(),
            department: department.to_string(),
            filing_date,
            status,
            ipr_type: ipr_type.to_string(),
            ipr_number,
        })
    }

    fn required(&self, field: FormField) -> Result<&str> {
        match self.get(field) {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(IprError::validation(field.name(), "is required")),
        }
    }

    fn slot(&self, field: FormField) -> &Option<String> {
        match field {
            FormField::Title => &self.title,
            FormField::Applicant => &self.applicant,
            FormField::Department => &self.department,
            FormField::FilingDate => &self.filing_date,
            FormField::Status => &self.status,
            FormField::Type => &self.ipr_type,
            FormField::Number => &self.ipr_number,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Title => &mut self.title,
            FormField::Applicant => &mut self.applicant,
            FormField::Department => &mut self.department,
            FormField::FilingDate => &mut self.filing_date,
            FormField::Status => &mut self.status,
            FormField::Type => &mut self.ipr_type,
            FormField::Number => &mut self.ipr_number,
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        IprError::validation(
            FormField::FilingDate.name(),
            format!("'{}' is not a date in YYYY-MM-DD form", raw),
        )
    })
}

/// A partial update: `None` leaves the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub applicant: Option<String>,
    pub department: Option<String>,
    pub filing_date: Option<String>,
    pub status: Option<String>,
    pub ipr_type: Option<String>,
    pub ipr_number: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Lays the given fields over `form`.
    pub fn apply_to(&self, form: &mut RecordForm) {
        let pairs = [
            (FormField::Title, &self.title),
            (FormField::Applicant, &self.applicant),
            (FormField::Department, &self.department),
            (FormField::FilingDate, &self.filing_date),
            (FormField::Status, &self.status),
            (FormField::Type, &self.ipr_type),
            (FormField::Number, &self.ipr_number),
        ];
        for (field, value) in pairs {
            if let Some(v) = value {
                form.set(field, v.clone());
            }
        }
    }
}
