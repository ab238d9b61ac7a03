use std::sync::Arc;

use axum::{response::Redirect, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use crate::{
    adapters::outbound::memory::{sample_entries, InMemoryEntryRepository},
    app_state::AppState,
    config::Settings,
    domain::models::ActivityCatalog,
    routes::{self, entries::ENTRIES_PATH},
};

pub fn create(config: &Settings) -> Router<()> {
    let repo = if config.application.seed_sample_entries {
        let entries = sample_entries();
        tracing::info!("Seeding entry store with {} sample entries", entries.len());
        InMemoryEntryRepository::with_entries(entries)
    } else {
        InMemoryEntryRepository::new()
    };

    let app_state = AppState::new(Arc::new(repo), ActivityCatalog::default());
    with_state(app_state)
}

pub fn with_state(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/", get(|| async { Redirect::to(ENTRIES_PATH) }))
        .nest(ENTRIES_PATH, routes::entries::router())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
