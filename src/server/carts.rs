//! Shopping-cart handlers. The listing is ownership-gated; a missing email
//! parameter degrades to an empty result set rather than an error.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use super::{AppState, OwnerQuery};
use crate::error::{AppError, AppResult};
use crate::identity::{require_owner, RequestContext};
use crate::store::{CartDoc, NewCart};

pub async fn list(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<OwnerQuery>,
) -> AppResult<Json<Vec<CartDoc>>> {
    let Some(email) = query.email else {
        return Ok(Json(Vec::new()));
    };
    require_owner(&ctx, &email)?;
    Ok(Json(state.store.carts_for(&email).await))
}

pub async fn create(State(state): State<AppState>, Json(new): Json<NewCart>) -> Json<Value> {
    let doc = state.store.insert_cart(new).await;
    Json(json!({ "insertedId": doc.id }))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CartDoc>> {
    state.store.delete_cart(&id).await.map(Json).ok_or(AppError::NotFound("cart"))
}
