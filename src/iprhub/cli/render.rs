//! Terminal rendering for session output.
//!
//! Every function returns a `String` so output can be checked without a
//! terminal. The listing and summary are always drawn whole; nothing is patched
//! in place.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use iprhub::api::{CmdMessage, MessageLevel};
use iprhub::commands::summary::DepartmentSummary;
use iprhub::form::{FormField, RecordForm};
use iprhub::index::{DisplayRecord, Row};
use iprhub::model::Status;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_COLUMN_WIDTH: usize = 28;
const HEADERS: [&str; 8] = [
    "#",
    "Title",
    "Applicant",
    "Department",
    "Filed On",
    "Status",
    "Type",
    "Id",
];

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_error(error: &dyn std::fmt::Display) -> String {
    format!("{} {}\n", "Error:".red().bold(), error)
}

fn status_colored(status: Status, text: &str) -> ColoredString {
    match status {
        Status::Draft => text.normal(),
        Status::Filed => text.cyan(),
        Status::Approved => text.green(),
        Status::Rejected => text.red(),
    }
}

fn row_cells(row: &Row<'_>) -> [String; 8] {
    let fields = &row.record.fields;
    [
        row.index.to_string(),
        fields.title.clone(),
        fields.applicant.clone(),
        fields.department.clone(),
        fields.filing_date.format("%Y-%m-%d").to_string(),
        fields.status.to_string(),
        fields.ipr_type.clone(),
        row.record.id().short(),
    ]
}

/// Draws rows as an aligned table. Wide cells are cut with an ellipsis.
pub fn render_table<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = Row<'a>>,
{
    let rows: Vec<(Status, [String; 8])> = rows
        .into_iter()
        .map(|row| (row.record.fields.status, row_cells(&row)))
        .collect();

    if rows.is_empty() {
        return "No records.\n".to_string();
    }

    let mut widths = HEADERS.map(|h| h.width());
    for (_, cells) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.width().min(MAX_COLUMN_WIDTH));
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect();
    out.push_str(&format!("{}\n", header.join("  ").trim_end().bold()));

    for (status, cells) in &rows {
        let mut line = Vec::with_capacity(cells.len());
        for (col, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
            let padded = pad(&truncate_to_width(cell, *width), *width);
            let styled = match col {
                0 => padded.yellow().to_string(),
                5 => status_colored(*status, &padded).to_string(),
                7 => padded.dimmed().to_string(),
                _ => padded,
            };
            line.push(styled);
        }
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

pub fn render_records(records: &[DisplayRecord]) -> String {
    render_table(records.iter().map(|dr| Row {
        index: dr.index,
        record: &dr.record,
    }))
}

pub fn render_summary(summary: &DepartmentSummary) -> String {
    let mut out = format!("{}\n", "Department summary".bold());
    if summary.is_empty() {
        out.push_str(&format!("{}\n", "  (no records)".dimmed()));
        return out;
    }

    for stats in summary.iter() {
        let counts = Status::ALL
            .iter()
            .map(|s| format!("{}: {}", s, stats.counts.get(*s)))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "  {}: {} {}\n",
            stats.department.bold(),
            counts,
            format!("({} total)", stats.counts.total()).dimmed()
        ));
    }
    out
}

pub fn render_record_detail(dr: &DisplayRecord) -> String {
    let record = &dr.record;
    let fields = &record.fields;
    let lines = [
        ("Title", fields.title.clone()),
        ("Applicant", fields.applicant.clone()),
        ("Department", fields.department.clone()),
        ("Filed On", fields.filing_date.format("%Y-%m-%d").to_string()),
        ("Status", fields.status.to_string()),
        ("Type", fields.ipr_type.clone()),
        (
            "Number",
            fields.ipr_number.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("Id", record.id().to_string()),
        ("Created", format_time_ago(record.metadata.created_at)),
        ("Updated", format_time_ago(record.metadata.updated_at)),
    ];

    let mut out = format!("{} {}\n", format!("{}.", dr.index).yellow(), fields.title.bold());
    out.push_str("--------------------------------\n");
    for (label, value) in lines {
        out.push_str(&format!("{:<12}{}\n", format!("{}:", label), value));
    }
    out
}

pub fn render_form(form: &RecordForm) -> String {
    let heading = match form.editing {
        Some(id) => format!("Editing record {}", id.short()),
        None => "New record".to_string(),
    };
    let mut out = format!("{}\n", heading.bold());
    for field in FormField::ALL {
        let value = match form.get(field) {
            Some(v) => v.to_string(),
            None => "(empty)".dimmed().to_string(),
        };
        out.push_str(&format!("  {:<13}{}\n", format!("{}:", field), value));
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
