use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{Activity, ActivityId, ActivitySummary, Entry, EntryDraft, EntryId},
    EntryError,
};

/// All stored entries together with their aggregate statistics.
#[derive(Debug, Clone)]
pub struct EntriesOverview {
    pub entries: Vec<Entry>,
    pub summary: ActivitySummary,
}

/// Inbound port for entry operations.
///
/// This trait defines the use cases that HTTP handlers can invoke.
#[async_trait]
pub trait EntriesService: Send + Sync + 'static {
    /// List entries and compute total and average daily activity.
    async fn list_entries(&self) -> Result<EntriesOverview, EntryError>;

    /// Get a single entry, failing with `NotFound` if it does not exist.
    async fn get_entry(&self, id: EntryId) -> Result<Entry, EntryError>;

    /// A blank draft for the add form, dated `today`.
    fn blank_entry(&self, today: Date) -> EntryDraft;

    /// Validate and store a new entry.
    ///
    /// Fails with `Validation` without touching the store if the draft
    /// has any field errors.
    async fn add_entry(&self, draft: EntryDraft) -> Result<Entry, EntryError>;

    /// Validate and replace an existing entry.
    async fn update_entry(&self, draft: EntryDraft) -> Result<Entry, EntryError>;

    /// Delete an entry. Deleting an unknown id is a no-op.
    async fn delete_entry(&self, id: EntryId) -> Result<(), EntryError>;

    /// Activities an entry can reference.
    fn activities(&self) -> Vec<Activity>;

    /// Resolve an activity name for display.
    fn activity_name(&self, id: ActivityId) -> Option<String>;
}
