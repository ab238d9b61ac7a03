//! HTTP response types for entry endpoints.
//!
//! Each type is the view model of one page of the entries UI.

use serde::Serialize;
use strum::IntoEnumIterator;
use time::Date;

use super::EntryForm;
use crate::domain::{
    models::{Activity, ActivitySummary, Entry, IntensityLevel},
    FieldErrors,
};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A stored entry, with its activity name resolved for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: i32,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub activity_id: i32,
    /// `None` if the entry references an activity missing from the catalog.
    pub activity_name: Option<String>,
    /// Minutes.
    pub duration: f64,
    pub intensity: Option<IntensityLevel>,
    pub exclude: bool,
    pub notes: Option<String>,
}

impl EntryResponse {
    pub fn new(entry: Entry, activity_name: Option<String>) -> Self {
        Self {
            id: entry.id.as_i32(),
            date: entry.date,
            activity_id: entry.activity_id.as_i32(),
            activity_name,
            duration: entry.duration,
            intensity: entry.intensity,
            exclude: entry.exclude,
            notes: entry.notes,
        }
    }
}

/// Response for the entries list page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesIndexResponse {
    pub entries: Vec<EntryResponse>,
    pub total_activity: f64,
    pub active_days: usize,
    pub average_daily_activity: f64,
}

impl EntriesIndexResponse {
    pub fn new(entries: Vec<EntryResponse>, summary: ActivitySummary) -> Self {
        Self {
            entries,
            total_activity: summary.total_activity,
            active_days: summary.active_days,
            average_daily_activity: summary.average_daily_activity,
        }
    }
}

/// A choice in the activity select list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: i32,
    pub name: String,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id.as_i32(),
            name: activity.name,
        }
    }
}

/// Response for the add and edit forms.
///
/// `entry` uses the same field names the form posts back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFormResponse {
    pub entry: EntryForm,
    pub activities: Vec<ActivityResponse>,
    pub intensity_levels: Vec<IntensityLevel>,
    pub errors: FieldErrors,
}

impl EntryFormResponse {
    pub fn new(entry: EntryForm, activities: Vec<Activity>, errors: FieldErrors) -> Self {
        Self {
            entry,
            activities: activities.into_iter().map(Into::into).collect(),
            intensity_levels: IntensityLevel::iter().collect(),
            errors,
        }
    }
}

/// Response for the delete confirmation page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEntryResponse {
    pub entry: EntryResponse,
}
