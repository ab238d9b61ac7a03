use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use time::Date;

use super::{ActivityId, EntryId};
use crate::domain::{EntryError, FieldErrors};

/// How hard an activity was.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
}

/// A single logged activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub date: Date,
    pub activity_id: ActivityId,
    /// Minutes.
    pub duration: f64,
    pub intensity: Option<IntensityLevel>,
    /// Excluded entries stay stored but do not count towards total activity.
    pub exclude: bool,
    pub notes: Option<String>,
}

/// An entry that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub date: Date,
    pub activity_id: ActivityId,
    pub duration: f64,
    pub intensity: Option<IntensityLevel>,
    pub exclude: bool,
    pub notes: Option<String>,
}

impl NewEntry {
    pub fn new(date: Date, activity_id: impl Into<ActivityId>, duration: f64) -> Self {
        Self {
            date,
            activity_id: activity_id.into(),
            duration,
            intensity: None,
            exclude: false,
            notes: None,
        }
    }

    pub fn with_intensity(mut self, intensity: IntensityLevel) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_id(self, id: EntryId) -> Entry {
        Entry {
            id,
            date: self.date,
            activity_id: self.activity_id,
            duration: self.duration,
            intensity: self.intensity,
            exclude: self.exclude,
            notes: self.notes,
        }
    }
}

/// Entry values as submitted by a client, before validation.
///
/// Fields that could not be converted are `None` and carry an error in
/// `errors` under the field's name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub id: Option<EntryId>,
    pub date: Option<Date>,
    pub activity_id: Option<ActivityId>,
    pub duration: Option<f64>,
    pub intensity: Option<IntensityLevel>,
    pub exclude: bool,
    pub notes: Option<String>,
    pub errors: FieldErrors,
}

impl EntryDraft {
    /// An empty draft for the given day, used to pre-fill the add form.
    pub fn blank(date: Date) -> Self {
        Self {
            date: Some(date),
            ..Default::default()
        }
    }

    pub fn into_new_entry(self) -> Result<NewEntry, EntryError> {
        match (self.date, self.activity_id, self.duration) {
            (Some(date), Some(activity_id), Some(duration)) if self.errors.is_empty() => {
                Ok(NewEntry {
                    date,
                    activity_id,
                    duration,
                    intensity: self.intensity,
                    exclude: self.exclude,
                    notes: self.notes,
                })
            }
            _ => Err(EntryError::Validation(self.required_errors())),
        }
    }

    pub fn into_entry(self) -> Result<Entry, EntryError> {
        let id = self.id.ok_or(EntryError::MissingId)?;
        Ok(self.into_new_entry()?.with_id(id))
    }

    fn required_errors(&self) -> FieldErrors {
        let mut errors = self.errors.clone();
        for (field, present) in [
            ("Date", self.date.is_some()),
            ("ActivityId", self.activity_id.is_some()),
            ("Duration", self.duration.is_some()),
        ] {
            if !present && errors.is_valid_field(field) {
                errors.add(field, format!("The {} field is required.", field));
            }
        }
        errors
    }
}

impl From<Entry> for EntryDraft {
    fn from(entry: Entry) -> Self {
        Self {
            id: Some(entry.id),
            date: Some(entry.date),
            activity_id: Some(entry.activity_id),
            duration: Some(entry.duration),
            intensity: entry.intensity,
            exclude: entry.exclude,
            notes: entry.notes,
            errors: FieldErrors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn intensity_parses_case_insensitively() {
        assert_eq!("high".parse::<IntensityLevel>().unwrap(), IntensityLevel::High);
        assert_eq!(IntensityLevel::Medium.to_string(), "Medium");
        assert!("extreme".parse::<IntensityLevel>().is_err());
    }

    #[test]
    fn complete_draft_converts_to_entry() {
        let draft = EntryDraft {
            id: Some(EntryId::new(7)),
            date: Some(date!(2024 - 01 - 01)),
            activity_id: Some(ActivityId::new(6)),
            duration: Some(30.0),
            intensity: Some(IntensityLevel::Low),
            exclude: true,
            notes: Some("easy jog".to_string()),
            errors: FieldErrors::default(),
        };

        let entry = draft.into_entry().unwrap();
        assert_eq!(entry.id, EntryId::new(7));
        assert_eq!(entry.duration, 30.0);
        assert!(entry.exclude);
        assert_eq!(entry.notes.as_deref(), Some("easy jog"));
    }

    #[test]
    fn draft_without_id_is_missing_id() {
        let draft = EntryDraft {
            duration: Some(10.0),
            activity_id: Some(ActivityId::new(1)),
            ..EntryDraft::blank(date!(2024 - 01 - 01))
        };

        assert!(matches!(draft.into_entry(), Err(EntryError::MissingId)));
    }

    #[test]
    fn incomplete_draft_reports_required_fields() {
        let draft = EntryDraft::blank(date!(2024 - 01 - 01));

        let Err(EntryError::Validation(errors)) = draft.into_new_entry() else {
            panic!("expected validation error");
        };
        assert!(errors.is_valid_field("Date"));
        assert!(!errors.is_valid_field("ActivityId"));
        assert!(!errors.is_valid_field("Duration"));
    }
}
