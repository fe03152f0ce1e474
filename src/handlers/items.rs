use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    response::Response,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::shared_types::{
    error_response, ApiError, MessageBody, BODY_TOO_LARGE, ENDPOINT_NOT_FOUND, ITEM_NOT_FOUND,
    NAME_REQUIRED, NO_DATA_PROVIDED,
};
use crate::app_state::AppState;
use crate::domain::{Item, ItemChanges, NewItem, StoreError};
use crate::middleware::RequestContext;

/// Response body of `GET /api/items`.
#[derive(Debug, Serialize)]
pub struct ItemList {
    items: Vec<Item>,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct CreateItemRequest {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateItemRequest {
    name: Option<String>,
    description: Option<String>,
}

impl From<UpdateItemRequest> for ItemChanges {
    fn from(req: UpdateItemRequest) -> Self {
        ItemChanges {
            name: req.name,
            description: req.description,
        }
    }
}

/// Integer `{id}` path segment.
///
/// A segment that is not made of ASCII digits only (no sign, no spaces) means
/// the route does not exist, so it is rejected with the generic 404 rather
/// than a 400.
pub struct ItemId(pub u64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // ---
        let not_found = || error_response(StatusCode::NOT_FOUND, ENDPOINT_NOT_FOUND);

        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;

        parse_item_id(&segment).map(ItemId).ok_or_else(not_found)
    }
}

fn parse_item_id(segment: &str) -> Option<u64> {
    // `u64::from_str` also accepts a leading '+'.
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Unwraps the buffered body, mapping extractor failures to JSON errors.
///
/// Oversized bodies get a 413; any other buffering failure is treated as
/// missing data and reported with the operation's `message`.
fn read_body(
    body: Result<Bytes, BytesRejection>,
    message: &'static str,
) -> Result<Bytes, ApiError> {
    // ---
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(BODY_TOO_LARGE)
        } else {
            ApiError::InvalidInput(message)
        }
    })
}

fn parse_create(body: &[u8]) -> Result<NewItem, ApiError> {
    // ---
    match serde_json::from_slice::<CreateItemRequest>(body) {
        Ok(CreateItemRequest {
            name: Some(name),
            description,
        }) => Ok(NewItem { name, description }),
        _ => Err(ApiError::InvalidInput(NAME_REQUIRED)),
    }
}

fn parse_update(body: &[u8]) -> Result<ItemChanges, ApiError> {
    // ---
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| ApiError::InvalidInput(NO_DATA_PROVIDED))?;

    // An empty object carries no data, while unknown keys are tolerated.
    match &value {
        serde_json::Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(ApiError::InvalidInput(NO_DATA_PROVIDED)),
    }

    serde_json::from_value::<UpdateItemRequest>(value)
        .map(ItemChanges::from)
        .map_err(|_| ApiError::InvalidInput(NO_DATA_PROVIDED))
}

/// Handler for listing all items (GET /api/items).
///
/// Always responds with `200 OK` and `{ "items": [...], "count": N }`.
pub async fn list_items(State(state): State<AppState>) -> Json<ItemList> {
    // ---
    let items = state.repository().list();
    let count = items.len();

    Json(ItemList { items, count })
}

/// Handler for fetching an item by ID (GET /api/items/{id}).
///
/// - If the item exists, responds with `200 OK` and the item as JSON.
/// - Otherwise responds with `404 Not Found` and `{ "error": "Item not found" }`.
#[tracing::instrument(skip_all)]
pub async fn get_item(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, ApiError> {
    // ---
    match state.repository().get(id) {
        Ok(item) => Ok(Json(item)),
        Err(StoreError::NotFound(_)) => {
            warn!(request_id = %ctx.request_id, item_id = id, "Item not found");
            Err(ApiError::NotFound(ITEM_NOT_FOUND))
        }
        Err(err) => Err(err.into()),
    }
}

/// Handler for creating a new item (POST /api/items).
///
/// Expects `{ "name": "...", "description": "..." }`; `description` is optional.
///
/// - Missing body, unparseable JSON or missing/empty `name` responds with
///   `400 Bad Request` and `{ "error": "Name is required" }`.
/// - A body over the router's limit responds with `413 Payload Too Large`.
/// - On success responds with `201 Created` and the stored item.
#[tracing::instrument(skip_all)]
pub async fn create_item(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    // ---
    let body = read_body(body, NAME_REQUIRED)?;
    let new_item = parse_create(&body)?;
    let item = state.repository().create(new_item)?;

    info!(request_id = %ctx.request_id, item_id = item.id, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for updating an existing item (PUT /api/items/{id}).
///
/// Only the fields present in the body are changed; unknown fields are ignored.
///
/// - Unknown id responds with `404 Not Found`, checked before the body.
/// - Missing, unparseable or empty body responds with `400 Bad Request` and
///   `{ "error": "No data provided" }`.
/// - On success responds with `200 OK` and the updated item.
#[tracing::instrument(skip_all)]
pub async fn update_item(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    ItemId(id): ItemId,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Item>, ApiError> {
    // ---
    let repository = state.repository();
    repository.get(id)?;

    let body = read_body(body, NO_DATA_PROVIDED)?;
    let changes = parse_update(&body)?;
    let item = repository.update(id, changes)?;

    info!(request_id = %ctx.request_id, item_id = id, "Item updated");

    Ok(Json(item))
}

/// Handler for deleting an item (DELETE /api/items/{id}).
///
/// Returns:
/// - `200 OK` with `{ "message": "Item deleted successfully" }` when removed.
/// - `404 Not Found` with `{ "error": "Item not found" }` otherwise.
#[tracing::instrument(skip_all)]
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    ItemId(id): ItemId,
) -> Result<Json<MessageBody>, ApiError> {
    // ---
    state.repository().delete(id)?;

    info!(request_id = %ctx.request_id, item_id = id, "Item deleted");

    Ok(Json(MessageBody {
        message: "Item deleted successfully",
    }))
}
