//! Entry store port (outbound).
//!
//! Defines the interface for keeping fitness entries.

use async_trait::async_trait;

use crate::domain::{
    models::{Entry, EntryId, NewEntry},
    EntryError,
};

/// Outbound port for entry persistence.
///
/// Implementations own id assignment and must keep entries in insertion
/// order.
#[async_trait]
pub trait EntryRepository: Send + Sync + 'static {
    /// Get all entries, oldest insertion first.
    async fn list_entries(&self) -> Result<Vec<Entry>, EntryError>;

    /// Get a single entry by id.
    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>, EntryError>;

    /// Store a new entry under a freshly assigned id.
    async fn add_entry(&self, entry: &NewEntry) -> Result<Entry, EntryError>;

    /// Replace the entry with the same id.
    ///
    /// Returns `EntryError::NotFound` if no such entry exists.
    async fn update_entry(&self, entry: &Entry) -> Result<(), EntryError>;

    /// Remove an entry. Removing an unknown id is not an error.
    ///
    /// Returns whether an entry was removed.
    async fn delete_entry(&self, id: EntryId) -> Result<bool, EntryError>;
}
