use thiserror::Error;

#[derive(Error, Debug)]
pub enum IprError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid status '{0}' (expected Draft, Filed, Approved or Rejected)")]
    InvalidStatus(String),

    #[error("Invalid {field}: {reason}")]
    ValidationFailed { field: &'static str, reason: String },

    #[error("No form in progress, start one with `new` or `edit`")]
    NoDraft,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl IprError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        IprError::ValidationFailed {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IprError>;
