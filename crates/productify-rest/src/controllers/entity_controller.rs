//! CRUD endpoints shared by every entity resource.
//!
//! Reads are anonymous; writes require an [`AuthenticatedUser`].

use crate::{
    extractors::{AuthenticatedUser, JsonBody, SkipTakeQuery},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use productify_core::{EntityId, Identifiable, PageRange, ProductifyError};
use productify_service::EntityService;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// An entity exposed over HTTP.
pub trait EntityResource: Send + Sync + 'static {
    /// Read view.
    type Dto: Serialize + Send + 'static;
    /// Create request body.
    type Create: DeserializeOwned + Send + 'static;
    /// Update request body.
    type Update: DeserializeOwned + Identifiable + Send + 'static;

    /// Resource name used in error messages.
    const NAME: &'static str;

    /// Mount point, used to build `Location` headers.
    const PATH: &'static str;

    /// Picks the resource's service out of the shared state.
    fn service(state: &AppState) -> Arc<dyn EntityService<Self::Dto, Self::Create, Self::Update>>;
}

/// Creates the five CRUD routes for `R`, to be nested at `R::PATH`.
pub fn router<R: EntityResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(get_one::<R>).put(update::<R>).delete(delete::<R>))
}

/// Rejects identities the store can never have assigned.
pub fn parse_id(raw: i64) -> Result<EntityId, AppError> {
    let id = EntityId::new(raw);
    if id.is_assigned() {
        Ok(id)
    } else {
        Err(AppError(ProductifyError::bad_request("Invalid id.")))
    }
}

async fn list<R: EntityResource>(
    State(state): State<AppState>,
    Query(query): Query<SkipTakeQuery>,
) -> ApiResult<Vec<R::Dto>> {
    let range = PageRange::try_from(query)?;
    debug!("List {} request: skip {}, take {}", R::NAME, range.skip, range.take);

    let items = R::service(&state).get_all(range).await?;
    ok(items)
}

async fn get_one<R: EntityResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<R::Dto> {
    debug!("Get {} request: {}", R::NAME, id);

    let id = parse_id(id)?;
    let item = R::service(&state)
        .get_by_id(id)
        .await?
        .ok_or_else(|| ProductifyError::not_found(R::NAME, id))?;

    ok(item)
}

async fn create<R: EntityResource>(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(request): JsonBody<R::Create>,
) -> Result<Response, AppError> {
    debug!("Create {} request by {}", R::NAME, user.subject());

    let id = R::service(&state).add(request).await?;
    Ok(created(format!("{}/{}", R::PATH, id), id))
}

async fn update<R: EntityResource>(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    JsonBody(request): JsonBody<R::Update>,
) -> Result<StatusCode, AppError> {
    debug!("Update {} request by {}: {}", R::NAME, user.subject(), id);

    let id = parse_id(id)?;
    if request.id() != id {
        return Err(AppError(ProductifyError::bad_request("ID mismatch.")));
    }

    R::service(&state).update(request).await?;
    Ok(no_content())
}

async fn delete<R: EntityResource>(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete {} request by {}: {}", R::NAME, user.subject(), id);

    let id = parse_id(id)?;
    R::service(&state).delete(id).await?;
    Ok(no_content())
}
