use crate::error::IprError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of a record, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell rows apart in a listing.
    pub fn short(&self) -> String {
        self.0.simple().to_string().chars().take(8).collect()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Draft,
    Filed,
    Approved,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Draft,
        Status::Filed,
        Status::Approved,
        Status::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Filed => "Filed",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Draft
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = IprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| IprError::InvalidStatus(s.to_string()))
    }
}

/// The user-editable part of a record. Everything the filing form captures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub title: String,
    pub applicant: String,
    pub department: String,
    pub filing_date: NaiveDate,
    pub status: Status,
    pub ipr_type: String,
    /// Official application or registration number, once one is issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipr_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Metadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatentRecord {
    #[serde(flatten)]
    pub metadata: Metadata,
    #[serde(flatten)]
    pub fields: RecordFields,
}

impl PatentRecord {
    pub fn new(fields: RecordFields) -> Self {
        Self {
            metadata: Metadata::new(),
            fields,
        }
    }

    pub fn id(&self) -> RecordId {
        self.metadata.id
    }

    /// Replaces the editable fields, keeping identity and creation time.
    pub fn replace_fields(&mut self, fields: RecordFields) {
        self.fields = fields;
        self.metadata.updated_at = Utc::now();
    }
}
