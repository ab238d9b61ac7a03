use thiserror::Error;

use super::{models::EntryId, FieldErrors};

/// Errors that can occur during entry operations.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("entry not found: {0}")]
    NotFound(EntryId),
    #[error("missing entry id")]
    MissingId,
    #[error("invalid entry: {0}")]
    Validation(FieldErrors),
}
