//! Collection endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use flashcards_core::Collection;

use crate::error::{ApiError, Result};
use crate::models::{CollectionSummary, CreateCollectionRequest};
use crate::routes::auth::AuthenticatedUser;
use crate::store::CollectionRecord;
use crate::AppState;

/// POST /api/collections
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<CreateCollectionRequest>,
) -> Result<(StatusCode, Json<CollectionSummary>)> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let record = state
        .store
        .create_collection(auth.user_id, payload.name.trim())?;
    Ok((
        StatusCode::CREATED,
        Json(CollectionSummary::from_record(record, 0)),
    ))
}

/// GET /api/collections
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<CollectionSummary>>> {
    let records = state.store.collections_for(auth.user_id)?;
    let mut summaries = Vec::with_capacity(records.len());
    for record in records {
        let card_count = state.store.cards_in_collection(record.id)?.len();
        summaries.push(CollectionSummary::from_record(record, card_count));
    }
    Ok(Json(summaries))
}

/// GET /api/collections/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Collection>> {
    owned_collection(&state, &auth, id)?;
    let collection = state
        .store
        .collection_with_cards(id)?
        .ok_or_else(|| ApiError::NotFound("Collection not found".to_string()))?;
    Ok(Json(collection))
}

/// DELETE /api/collections/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    owned_collection(&state, &auth, id)?;
    state.store.delete_collection(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Look up a collection, treating other owners' collections as absent.
fn owned_collection(
    state: &AppState,
    auth: &AuthenticatedUser,
    id: Uuid,
) -> Result<CollectionRecord> {
    state
        .store
        .collection(id)?
        .filter(|record| record.owner_id == auth.user_id)
        .ok_or_else(|| ApiError::NotFound("Collection not found".to_string()))
}
