//! The record session: one command per line, run to completion before the
//! next is read.
//!
//! A session owns the API (and through it the store) plus at most one form in
//! progress. A failing command reports its error and the session carries on.

use super::args::{SessionCommand, SessionLine};
use super::render::{
    render_error, render_form, render_messages, render_record_detail, render_records,
    render_summary, render_table,
};
use clap::error::ErrorKind;
use clap::Parser;
use iprhub::api::{CmdMessage, CmdResult, IprApi};
use iprhub::commands::list::RecordFilter;
use iprhub::error::{IprError, Result};
use iprhub::form::{FormField, RecordForm};
use iprhub::model::Status;
use iprhub::store::DataStore;
use std::io::Write;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<S: DataStore> {
    api: IprApi<S>,
    draft: Option<RecordForm>,
    render_after_mutation: bool,
}

impl<S: DataStore> Session<S> {
    pub fn new(api: IprApi<S>, render_after_mutation: bool) -> Self {
        Self {
            api,
            draft: None,
            render_after_mutation,
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &IprApi<S> {
        &self.api
    }

    /// Runs one input line. Only failures to write output are returned as
    /// errors; command failures are reported on `err`.
    pub fn execute(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let tokens = match split_line(line) {
            Ok(tokens) => tokens,
            Err(e) => {
                write!(err, "{}", render_error(&e))?;
                return Ok(Flow::Continue);
            }
        };

        let parsed = match SessionLine::try_parse_from(tokens) {
            Ok(parsed) => parsed,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                write!(err, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        debug!(command = ?parsed.command, "session command");
        // Only a failed write to `out` ends the session
        let mut buf = String::new();
        let outcome = self.dispatch(parsed.command, &mut buf);
        out.write_all(buf.as_bytes())?;

        match outcome {
            Ok(flow) => Ok(flow),
            Err(e) => {
                warn!(error = %e, "command failed");
                write!(err, "{}", render_error(&e))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: SessionCommand, out: &mut String) -> Result<Flow> {
        match command {
            SessionCommand::Add(args) => {
                let result = self.api.submit_form(&args.into_form())?;
                self.report(&result, out);
            }
            SessionCommand::New => {
                self.start_draft(RecordForm::new(), out);
            }
            SessionCommand::Edit { selector } => {
                let form = self.api.edit_record(&selector)?;
                self.start_draft(form, out);
            }
            SessionCommand::Set { field, value } => {
                let field: FormField = field.parse()?;
                let draft = self.draft.as_mut().ok_or(IprError::NoDraft)?;
                draft.set(field, value.join(" "));
            }
            SessionCommand::Form => {
                let draft = self.draft.as_ref().ok_or(IprError::NoDraft)?;
                out.push_str(&render_form(draft));
            }
            SessionCommand::Submit => {
                let draft = self.draft.as_ref().ok_or(IprError::NoDraft)?;
                let result = self.api.submit_form(draft)?;
                // Only a successful submit resets the form
                self.draft = None;
                self.report(&result, out);
            }
            SessionCommand::Cancel => {
                self.draft.take().ok_or(IprError::NoDraft)?;
                out.push_str(&render_messages(&[CmdMessage::info("Form discarded.")]));
            }
            SessionCommand::Update { selector, fields } => {
                let result = self.api.patch_record(&selector, &fields.into_patch())?;
                self.report(&result, out);
            }
            SessionCommand::Delete { selector } => {
                let result = self.api.delete_record(&selector)?;
                self.report(&result, out);
            }
            SessionCommand::Show { selector } => {
                let result = self.api.view_record(&selector)?;
                for dr in &result.listed_records {
                    out.push_str(&render_record_detail(dr));
                }
            }
            SessionCommand::List { status, department } => {
                let filter = RecordFilter {
                    status: status.as_deref().map(str::parse::<Status>).transpose()?,
                    department,
                };
                if filter.is_empty() {
                    out.push_str(&render_table(self.api.listing()));
                } else {
                    let result = self.api.list_records(&filter)?;
                    out.push_str(&render_records(&result.listed_records));
                }
            }
            SessionCommand::Summary => {
                out.push_str(&render_summary(&self.api.summary()));
            }
            SessionCommand::Export { path } => {
                let result = self.api.export_report(&path)?;
                out.push_str(&render_messages(&result.messages));
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Installs `form` as the draft, warning when it displaces unsaved input.
    fn start_draft(&mut self, form: RecordForm, out: &mut String) {
        let rendered = render_form(&form);
        if let Some(previous) = self.draft.replace(form) {
            let what = match previous.editing {
                Some(id) => format!("edit of record {}", id.short()),
                None => "new record".to_string(),
            };
            out.push_str(&render_messages(&[CmdMessage::warning(format!(
                "Discarded the unsubmitted {} form",
                what
            ))]));
        }
        out.push_str(&rendered);
    }

    /// Renders a mutation's messages, then redraws both views.
    fn report(&self, result: &CmdResult, out: &mut String) {
        out.push_str(&render_messages(&result.messages));
        if self.render_after_mutation && result.is_mutation() {
            out.push_str(&render_table(self.api.listing()));
            out.push_str(&render_summary(&self.api.summary()));
        }
    }
}

/// Splits a line into words the way a POSIX shell would: single quotes are
/// literal, and inside double quotes a backslash only escapes `"`, `\\` and `$`.
/// Elsewhere it is kept as typed, so `"C:\dir"` stays `C:\dir`.
pub fn split_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('\''), c) => current.push(c),
            (Some('"'), '\\') => match chars.peek() {
                Some(&next) if matches!(next, '"' | '\\' | '$') => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push('\\'),
            },
            (None, '\\') => match chars.next() {
                Some(next) => {
                    current.push(next);
                    in_word = true;
                }
                None => return Err("line ends with a lone backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '\'') | (None, '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unclosed {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
