use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::Form;
use time::OffsetDateTime;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{
        ActivityResponse, DeleteEntryResponse, EntriesIndexResponse, EntryForm, EntryFormResponse,
        EntryResponse, IdForm,
    },
    app_state::AppState,
    domain::{
        models::{Entry, EntryDraft, EntryId},
        ports::inbound::EntriesService,
        EntryError, FieldErrors,
    },
    routes::ApiError,
};

pub const ENTRIES_PATH: &str = "/Entries";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries))
        .route("/Add", get(show_add_form).post(submit_add))
        .route("/Edit", get(show_edit_form_by_query).post(submit_edit))
        .route("/Edit/", get(show_edit_form_by_query))
        .route("/Edit/:id", get(show_edit_form))
        .route("/Delete", get(show_delete_confirm_by_query).post(submit_delete))
        .route("/Delete/", get(show_delete_confirm_by_query))
        .route("/Delete/:id", get(show_delete_confirm))
        .route("/Activities", get(list_activities))
}

fn parse_id(raw: Option<&str>) -> Result<EntryId, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("missing entry id"))?;

    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("invalid entry id: {}", raw)))
}

fn entry_response(service: &dyn EntriesService, entry: Entry) -> EntryResponse {
    let activity_name = service.activity_name(entry.activity_id);
    EntryResponse::new(entry, activity_name)
}

fn form_response(
    service: &dyn EntriesService,
    entry: EntryForm,
    errors: FieldErrors,
) -> EntryFormResponse {
    EntryFormResponse::new(entry, service.activities(), errors)
}

/// Post/Redirect/Get: a refresh after a successful write must not resubmit it.
fn redirect_to_list() -> Response {
    Redirect::to(ENTRIES_PATH).into_response()
}

/// Outcome of a submitted add or edit form.
fn submitted(
    service: &dyn EntriesService,
    form: EntryForm,
    result: Result<Entry, EntryError>,
) -> Result<Response, ApiError> {
    match result {
        Ok(_) => Ok(redirect_to_list()),
        Err(EntryError::Validation(errors)) => {
            let body = form_response(service, form, errors);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

// ============================================================================
// List
// ============================================================================

#[instrument(name = "list_entries", skip(app_state))]
pub async fn list_entries(
    State(app_state): State<AppState>,
) -> Result<Json<EntriesIndexResponse>, ApiError> {
    let service = app_state.entries.as_ref();
    let overview = service.list_entries().await?;

    let entries = overview
        .entries
        .into_iter()
        .map(|entry| entry_response(service, entry))
        .collect();

    Ok(Json(EntriesIndexResponse::new(entries, overview.summary)))
}

#[instrument(name = "list_activities", skip(app_state))]
pub async fn list_activities(State(app_state): State<AppState>) -> Json<Vec<ActivityResponse>> {
    let activities = app_state.entries.activities();
    Json(activities.into_iter().map(Into::into).collect())
}

// ============================================================================
// Add
// ============================================================================

#[instrument(name = "show_add_form", skip(app_state))]
pub async fn show_add_form(State(app_state): State<AppState>) -> Json<EntryFormResponse> {
    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();
    let service = app_state.entries.as_ref();
    let draft = service.blank_entry(today);

    Json(form_response(
        service,
        EntryForm::from(&draft),
        FieldErrors::default(),
    ))
}

#[instrument(name = "submit_add", skip(app_state))]
pub async fn submit_add(
    State(app_state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Response, ApiError> {
    let service = app_state.entries.as_ref();
    let result = service.add_entry(form.bind()).await;

    submitted(service, form, result)
}

// ============================================================================
// Edit
// ============================================================================

#[instrument(name = "show_edit_form", skip(app_state))]
pub async fn show_edit_form(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntryFormResponse>, ApiError> {
    edit_form(&app_state, Some(&id)).await
}

#[instrument(name = "show_edit_form", skip(app_state))]
pub async fn show_edit_form_by_query(
    State(app_state): State<AppState>,
    Query(query): Query<IdForm>,
) -> Result<Json<EntryFormResponse>, ApiError> {
    edit_form(&app_state, query.id.as_deref()).await
}

async fn edit_form(
    app_state: &AppState,
    raw_id: Option<&str>,
) -> Result<Json<EntryFormResponse>, ApiError> {
    let id = parse_id(raw_id)?;
    let service = app_state.entries.as_ref();
    let entry = service.get_entry(id).await?;

    Ok(Json(form_response(
        service,
        EntryForm::from(&EntryDraft::from(entry)),
        FieldErrors::default(),
    )))
}

#[instrument(name = "submit_edit", skip(app_state))]
pub async fn submit_edit(
    State(app_state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Response, ApiError> {
    let service = app_state.entries.as_ref();
    let result = service.update_entry(form.bind()).await;

    submitted(service, form, result)
}

// ============================================================================
// Delete
// ============================================================================

#[instrument(name = "show_delete_confirm", skip(app_state))]
pub async fn show_delete_confirm(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteEntryResponse>, ApiError> {
    delete_confirm(&app_state, Some(&id)).await
}

#[instrument(name = "show_delete_confirm", skip(app_state))]
pub async fn show_delete_confirm_by_query(
    State(app_state): State<AppState>,
    Query(query): Query<IdForm>,
) -> Result<Json<DeleteEntryResponse>, ApiError> {
    delete_confirm(&app_state, query.id.as_deref()).await
}

async fn delete_confirm(
    app_state: &AppState,
    raw_id: Option<&str>,
) -> Result<Json<DeleteEntryResponse>, ApiError> {
    let id = parse_id(raw_id)?;
    let service = app_state.entries.as_ref();
    let entry = service.get_entry(id).await?;

    Ok(Json(DeleteEntryResponse {
        entry: entry_response(service, entry),
    }))
}

#[instrument(name = "submit_delete", skip(app_state))]
pub async fn submit_delete(
    State(app_state): State<AppState>,
    Form(form): Form<IdForm>,
) -> Result<Response, ApiError> {
    let id = parse_id(form.id.as_deref())?;
    app_state.entries.delete_entry(id).await?;

    Ok(redirect_to_list())
}
