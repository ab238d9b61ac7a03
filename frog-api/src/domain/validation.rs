use serde::Serialize;

use super::models::EntryDraft;

pub const DURATION_FIELD: &str = "Duration";

/// Longest accepted entry, in minutes. Keeps activity totals finite.
pub const MAX_DURATION_MINUTES: f64 = 24.0 * 60.0;

/// A message attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field-scoped errors, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Whether no error has been recorded for `field` yet.
    pub fn is_valid_field(&self, field: &str) -> bool {
        !self.0.iter().any(|error| error.field == field)
    }

    #[cfg(test)]
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |error| error.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<_> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

/// Business rules applied to an entry before it is stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryValidator;

impl EntryValidator {
    /// Returns the draft's binding errors plus any rule violations.
    pub fn validate(&self, draft: &EntryDraft) -> FieldErrors {
        let mut errors = draft.errors.clone();

        // A duration that failed conversion already has its own message.
        if errors.is_valid_field(DURATION_FIELD) {
            if let Some(duration) = draft.duration {
                if duration <= 0.0 {
                    errors.add(
                        DURATION_FIELD,
                        "The Duration field value must be greater than '0'.",
                    );
                } else if duration > MAX_DURATION_MINUTES {
                    errors.add(
                        DURATION_FIELD,
                        format!(
                            "The Duration field value must not exceed '{}'.",
                            MAX_DURATION_MINUTES
                        ),
                    );
                }
            }
        }

        errors
    }
}
