//! In-memory implementation of the EntryRepository port.

mod sample;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    models::{Entry, EntryId, NewEntry},
    ports::outbound::EntryRepository,
    EntryError,
};

pub use sample::sample_entries;

#[derive(Debug, Default)]
struct EntryTable {
    entries: Vec<Entry>,
    last_id: i32,
}

impl EntryTable {
    fn insert(&mut self, entry: &NewEntry) -> Entry {
        // Ids are never reused, even after the newest entry is deleted.
        self.last_id += 1;
        let entry = entry.clone().with_id(EntryId::new(self.last_id));
        self.entries.push(entry.clone());
        entry
    }
}

/// Entry store kept in process memory.
///
/// A single `RwLock` serializes writers; readers see a consistent snapshot.
#[derive(Debug, Default)]
pub struct InMemoryEntryRepository {
    table: RwLock<EntryTable>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`, assigning ids in order.
    pub fn with_entries(entries: Vec<NewEntry>) -> Self {
        let mut table = EntryTable::default();
        for entry in &entries {
            table.insert(entry);
        }

        Self {
            table: RwLock::new(table),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.table.read().await.entries.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.entries.is_empty()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn list_entries(&self) -> Result<Vec<Entry>, EntryError> {
        Ok(self.table.read().await.entries.clone())
    }

    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>, EntryError> {
        let table = self.table.read().await;
        Ok(table.entries.iter().find(|entry| entry.id == id).cloned())
    }

    async fn add_entry(&self, entry: &NewEntry) -> Result<Entry, EntryError> {
        Ok(self.table.write().await.insert(entry))
    }

    async fn update_entry(&self, entry: &Entry) -> Result<(), EntryError> {
        let mut table = self.table.write().await;
        let stored = table
            .entries
            .iter_mut()
            .find(|stored| stored.id == entry.id)
            .ok_or(EntryError::NotFound(entry.id))?;

        *stored = entry.clone();
        Ok(())
    }

    async fn delete_entry(&self, id: EntryId) -> Result<bool, EntryError> {
        let mut table = self.table.write().await;
        let before = table.entries.len();
        table.entries.retain(|entry| entry.id != id);

        Ok(table.entries.len() != before)
    }
}
