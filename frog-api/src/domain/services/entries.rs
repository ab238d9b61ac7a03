use std::sync::Arc;

use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{Activity, ActivityCatalog, ActivityId, ActivitySummary, Entry, EntryDraft, EntryId},
    ports::{
        inbound::{EntriesOverview, EntriesService},
        outbound::EntryRepository,
    },
    EntryError, EntryValidator,
};

/// Implementation of the EntriesService inbound port.
///
/// Validates drafts with an `EntryValidator` before delegating writes to the
/// EntryRepository (outbound port).
pub struct EntriesServiceImpl<R> {
    repo: Arc<R>,
    catalog: ActivityCatalog,
    validator: EntryValidator,
}

impl<R> EntriesServiceImpl<R> {
    pub fn new(repo: Arc<R>, catalog: ActivityCatalog) -> Self {
        Self {
            repo,
            catalog,
            validator: EntryValidator,
        }
    }

    fn validated(&self, draft: EntryDraft) -> Result<EntryDraft, EntryError> {
        let errors = self.validator.validate(&draft);
        if errors.is_empty() {
            Ok(draft)
        } else {
            tracing::debug!("Rejected entry: {}", errors);
            Err(EntryError::Validation(errors))
        }
    }
}

#[async_trait]
impl<R: EntryRepository> EntriesService for EntriesServiceImpl<R> {
    async fn list_entries(&self) -> Result<EntriesOverview, EntryError> {
        let entries = self.repo.list_entries().await?;
        let summary = ActivitySummary::from_entries(&entries);

        Ok(EntriesOverview { entries, summary })
    }

    async fn get_entry(&self, id: EntryId) -> Result<Entry, EntryError> {
        self.repo
            .get_entry(id)
            .await?
            .ok_or(EntryError::NotFound(id))
    }

    fn blank_entry(&self, today: Date) -> EntryDraft {
        EntryDraft::blank(today)
    }

    async fn add_entry(&self, draft: EntryDraft) -> Result<Entry, EntryError> {
        let new_entry = self.validated(draft)?.into_new_entry()?;
        let entry = self.repo.add_entry(&new_entry).await?;

        tracing::info!("Added entry {} on {}", entry.id, entry.date);
        Ok(entry)
    }

    async fn update_entry(&self, draft: EntryDraft) -> Result<Entry, EntryError> {
        // Without an id there is nothing to update, whatever the other fields say.
        if draft.id.is_none() {
            return Err(EntryError::MissingId);
        }

        let entry = self.validated(draft)?.into_entry()?;
        self.repo.update_entry(&entry).await?;

        tracing::info!("Updated entry {}", entry.id);
        Ok(entry)
    }

    async fn delete_entry(&self, id: EntryId) -> Result<(), EntryError> {
        if self.repo.delete_entry(id).await? {
            tracing::info!("Deleted entry {}", id);
        } else {
            tracing::debug!("Delete of unknown entry {} ignored", id);
        }

        Ok(())
    }

    fn activities(&self) -> Vec<Activity> {
        self.catalog.activities().to_vec()
    }

    fn activity_name(&self, id: ActivityId) -> Option<String> {
        self.catalog.name_of(id).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::InMemoryEntryRepository;
    use crate::domain::models::{IntensityLevel, NewEntry};
    use time::macros::date;

    fn service() -> (EntriesServiceImpl<InMemoryEntryRepository>, Arc<InMemoryEntryRepository>) {
        let repo = Arc::new(InMemoryEntryRepository::new());
        (
            EntriesServiceImpl::new(repo.clone(), ActivityCatalog::default()),
            repo,
        )
    }

    fn draft(duration: f64) -> EntryDraft {
        EntryDraft {
            activity_id: Some(ActivityId::new(6)),
            duration: Some(duration),
            intensity: Some(IntensityLevel::High),
            ..EntryDraft::blank(date!(2024 - 01 - 01))
        }
    }

    #[tokio::test]
    async fn add_then_get_returns_submitted_entry() {
        let (service, _) = service();

        let added = service.add_entry(draft(30.0)).await.unwrap();
        let fetched = service.get_entry(added.id).await.unwrap();

        assert_eq!(fetched, added);
        assert_eq!(fetched.date, date!(2024 - 01 - 01));
        assert_eq!(fetched.activity_id, ActivityId::new(6));
        assert_eq!(fetched.duration, 30.0);
        assert_eq!(fetched.intensity, Some(IntensityLevel::High));
    }

    #[tokio::test]
    async fn invalid_add_does_not_touch_store() {
        let (service, repo) = service();

        let result = service.add_entry(draft(0.0)).await;

        let Err(EntryError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        assert!(!errors.is_valid_field("Duration"));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let (service, _) = service();
        let added = service.add_entry(draft(30.0)).await.unwrap();

        let mut edited = EntryDraft::from(added.clone());
        edited.duration = Some(45.0);
        edited.exclude = true;
        edited.notes = Some("felt great".to_string());
        service.update_entry(edited).await.unwrap();

        let fetched = service.get_entry(added.id).await.unwrap();
        assert_eq!(fetched.duration, 45.0);
        assert!(fetched.exclude);
        assert_eq!(fetched.notes.as_deref(), Some("felt great"));
    }

    #[tokio::test]
    async fn invalid_update_keeps_stored_entry() {
        let (service, _) = service();
        let added = service.add_entry(draft(30.0)).await.unwrap();

        let mut edited = EntryDraft::from(added.clone());
        edited.duration = Some(-5.0);
        let result = service.update_entry(edited).await;

        assert!(matches!(result, Err(EntryError::Validation(_))));
        assert_eq!(service.get_entry(added.id).await.unwrap(), added);
    }

    #[tokio::test]
    async fn update_of_unknown_entry_is_not_found() {
        let (service, _) = service();

        let mut edited = draft(30.0);
        edited.id = Some(EntryId::new(99));

        assert!(matches!(
            service.update_entry(edited).await,
            Err(EntryError::NotFound(id)) if id == EntryId::new(99)
        ));
    }

    #[tokio::test]
    async fn update_without_id_is_missing_id() {
        let (service, _) = service();

        assert!(matches!(
            service.update_entry(draft(-1.0)).await,
            Err(EntryError::MissingId)
        ));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (service, _) = service();
        let added = service.add_entry(draft(30.0)).await.unwrap();

        service.delete_entry(added.id).await.unwrap();

        assert!(matches!(
            service.get_entry(added.id).await,
            Err(EntryError::NotFound(_))
        ));
        // Second delete is a no-op.
        service.delete_entry(added.id).await.unwrap();
    }

    #[tokio::test]
    async fn list_entries_includes_summary() {
        let repo = Arc::new(InMemoryEntryRepository::with_entries(vec![
            NewEntry::new(date!(2024 - 01 - 01), 6, 30.0),
            NewEntry::new(date!(2024 - 01 - 01), 2, 20.0).excluded(),
            NewEntry::new(date!(2024 - 01 - 02), 10, 10.0),
        ]));
        let service = EntriesServiceImpl::new(repo, ActivityCatalog::default());

        let overview = service.list_entries().await.unwrap();

        assert_eq!(overview.entries.len(), 3);
        assert_eq!(overview.summary.total_activity, 40.0);
        assert_eq!(overview.summary.active_days, 2);
        assert_eq!(overview.summary.average_daily_activity, 20.0);
    }

    #[tokio::test]
    async fn blank_entry_is_dated_today() {
        let (service, _) = service();

        let blank = service.blank_entry(date!(2026 - 10 - 16));

        assert_eq!(blank.date, Some(date!(2026 - 10 - 16)));
        assert!(blank.id.is_none());
        assert!(blank.errors.is_empty());
    }
}
