//! Card endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use flashcards_core::Card;

use crate::error::{ApiError, Result};
use crate::models::{CardListQuery, CreateCardRequest};
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

/// POST /api/cards
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<Card>)> {
    let collection = state
        .store
        .collection(payload.collection_id)?
        .ok_or_else(|| ApiError::NotFound("Collection not found".to_string()))?;
    if collection.owner_id != auth.user_id {
        return Err(ApiError::NotFound("Collection not found".to_string()));
    }

    let card = Card {
        id: Uuid::new_v4(),
        term: payload.term,
        definition: payload.definition,
        owner_id: auth.user_id,
        collection_id: collection.id,
    };
    state.store.add_card(card.clone())?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// GET /api/cards?collection_id=...
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(query): Query<CardListQuery>,
) -> Result<Json<Vec<Card>>> {
    let cards = match query.collection_id {
        Some(collection_id) => {
            let collection = state
                .store
                .collection(collection_id)?
                .ok_or_else(|| ApiError::NotFound("Collection not found".to_string()))?;
            if collection.owner_id != auth.user_id {
                return Err(ApiError::NotFound("Collection not found".to_string()));
            }
            state.store.cards_in_collection(collection_id)?
        }
        None => state.store.cards_for(auth.user_id)?,
    };
    Ok(Json(cards))
}

/// GET /api/cards/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Card>> {
    let card = owned_card(&state, &auth, id)?;
    Ok(Json(card))
}

/// DELETE /api/cards/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    owned_card(&state, &auth, id)?;
    state.store.delete_card(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Look up a card, treating other owners' cards as absent.
fn owned_card(state: &AppState, auth: &AuthenticatedUser, id: Uuid) -> Result<Card> {
    state
        .store
        .card(id)?
        .filter(|card| card.owner_id == auth.user_id)
        .ok_or_else(|| ApiError::NotFound("Card not found".to_string()))
}
