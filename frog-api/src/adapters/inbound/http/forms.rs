//! Form payloads for entry endpoints and their conversion into drafts.
//!
//! Every field is taken as a raw string so that a value which fails to
//! convert can be reported per field and echoed back to the client.

use serde::{Deserialize, Serialize};
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

use crate::domain::{
    models::{ActivityId, EntryDraft, EntryId, IntensityLevel},
    FieldErrors,
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Entry fields as posted by the add and edit forms.
///
/// Also used to echo attempted values when a form is re-rendered.
/// `Exclude` may repeat: a checkbox helper posts `Exclude=true&Exclude=false`
/// when ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntryForm {
    pub id: Option<String>,
    pub date: Option<String>,
    pub activity_id: Option<String>,
    pub duration: Option<String>,
    pub intensity: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    pub notes: Option<String>,
}

impl EntryForm {
    pub fn bind(&self) -> EntryDraft {
        let mut errors = FieldErrors::default();

        let id = optional(&self.id, "Id", &mut errors, |s| s.parse::<EntryId>().ok());
        let date = required(&self.date, "Date", &mut errors, parse_date);
        let activity_id = required(&self.activity_id, "ActivityId", &mut errors, |s| {
            s.parse::<ActivityId>().ok()
        });
        let duration = required(&self.duration, "Duration", &mut errors, parse_duration);
        let intensity = optional(&self.intensity, "Intensity", &mut errors, |s| {
            s.parse::<IntensityLevel>().ok()
        });
        let exclude_raw = (!self.exclude.is_empty()).then(|| self.exclude.join(","));
        let exclude = optional(&exclude_raw, "Exclude", &mut errors, parse_checkbox)
            .unwrap_or(false);
        let notes = non_blank(&self.notes).map(str::to_owned);

        EntryDraft {
            id,
            date,
            activity_id,
            duration,
            intensity,
            exclude,
            notes,
            errors,
        }
    }
}

impl From<&EntryDraft> for EntryForm {
    fn from(draft: &EntryDraft) -> Self {
        Self {
            id: draft.id.map(|id| id.to_string()),
            date: draft.date.and_then(|date| date.format(DATE_FORMAT).ok()),
            activity_id: draft.activity_id.map(|id| id.to_string()),
            duration: draft.duration.map(|duration| duration.to_string()),
            intensity: draft.intensity.map(|intensity| intensity.to_string()),
            exclude: vec![draft.exclude.to_string()],
            notes: draft.notes.clone(),
        }
    }
}

/// Body of the delete form, and the query of the edit/delete pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdForm {
    #[serde(alias = "Id")]
    pub id: Option<String>,
}

fn non_blank(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required<T>(
    raw: &Option<String>,
    field: &str,
    errors: &mut FieldErrors,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    if non_blank(raw).is_none() {
        errors.add(field, format!("The {} field is required.", field));
        return None;
    }
    optional(raw, field, errors, parse)
}

fn optional<T>(
    raw: &Option<String>,
    field: &str,
    errors: &mut FieldErrors,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let value = non_blank(raw)?;
    let parsed = parse(value);
    if parsed.is_none() {
        errors.add(
            field,
            format!("The value '{}' is not valid for {}.", value, field),
        );
    }
    parsed
}

fn parse_date(s: &str) -> Option<Date> {
    Date::parse(s, DATE_FORMAT).ok()
}

fn parse_duration(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|d| d.is_finite())
}

/// Repeated checkbox values arrive comma-joined; any truthy part wins.
fn parse_checkbox(s: &str) -> Option<bool> {
    let parts: Option<Vec<bool>> = s
        .split(',')
        .map(|part| match part.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "1" => Some(true),
            "false" | "off" | "0" => Some(false),
            _ => None,
        })
        .collect();

    parts.map(|parts| parts.into_iter().any(|ticked| ticked))
}
