use clap::{ArgAction, Args, Parser, Subcommand};
use iprhub::form::{RecordForm, RecordPatch};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iprhub", version)]
#[command(
    about = "Record manager for patent, trademark and copyright filings",
    long_about = "Starts a record session. Commands are read one per line from --script or stdin; \
                  type `help` inside the session for the list. Records live only for the session."
)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read session commands from this file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(
    name = "iprhub",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add a record in one go
    #[command(alias = "create")]
    Add(RecordArgs),

    /// Start filling in a new record form
    New,

    /// Load a record into the form (the record stays until you submit)
    Edit {
        /// Row number or record id
        selector: String,
    },

    /// Set a field on the form in progress
    Set {
        /// title, applicant, department, filing-date, status, type or number
        field: String,

        /// New value (the rest of the line)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Show the form in progress
    Form,

    /// Save the form: updates the record being edited, or adds a new one
    Submit,

    /// Throw the form away
    Cancel,

    /// Change some fields of a record in place
    Update {
        /// Row number or record id
        selector: String,

        #[command(flatten)]
        fields: RecordArgs,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete {
        /// Row number or record id
        selector: String,
    },

    /// Show one record in full
    #[command(alias = "view")]
    Show {
        /// Row number or record id
        selector: String,
    },

    /// List records
    #[command(alias = "ls")]
    List {
        /// Only records with this status
        #[arg(long)]
        status: Option<String>,

        /// Only records of this department (exact match)
        #[arg(long)]
        department: Option<String>,
    },

    /// Per-department status counts
    Summary,

    /// Write listing and summary to a JSON file
    Export { path: PathBuf },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RecordArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub applicant: Option<String>,

    #[arg(long)]
    pub department: Option<String>,

    /// Filing date, YYYY-MM-DD
    #[arg(long = "filing-date", alias = "date")]
    pub filing_date: Option<String>,

    /// Draft, Filed, Approved or Rejected
    #[arg(long)]
    pub status: Option<String>,

    /// Patent, Trademark, Copyright, ...
    #[arg(long = "type")]
    pub ipr_type: Option<String>,

    /// Application or registration number
    #[arg(long = "number")]
    pub ipr_number: Option<String>,
}

impl RecordArgs {
    pub fn into_patch(self) -> RecordPatch {
        RecordPatch {
            title: self.title,
            applicant: self.applicant,
            department: self.department,
            filing_date: self.filing_date,
            status: self.status,
            ipr_type: self.ipr_type,
            ipr_number: self.ipr_number,
        }
    }

    pub fn into_form(self) -> RecordForm {
        let mut form = RecordForm::new();
        self.into_patch().apply_to(&mut form);
        form
    }
}
