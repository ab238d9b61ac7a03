use std::sync::Arc;

use crate::domain::{
    models::ActivityCatalog,
    ports::{inbound::EntriesService, outbound::EntryRepository},
    services::EntriesServiceImpl,
};

/// State shared by all request handlers.
///
/// The entry store lives behind the service; each handler gets a handle to
/// it instead of reaching for process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub entries: Arc<dyn EntriesService>,
}

impl AppState {
    pub fn new<R: EntryRepository>(repo: Arc<R>, catalog: ActivityCatalog) -> Self {
        Self {
            entries: Arc::new(EntriesServiceImpl::new(repo, catalog)),
        }
    }
}
