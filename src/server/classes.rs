//! Class collection handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::AppState;
use crate::error::{AppError, AppResult};
use crate::identity::RequestContext;
use crate::store::{ClassDoc, ClassPatch, NewClass};

pub async fn list(State(state): State<AppState>) -> Json<Vec<ClassDoc>> {
    Json(state.store.list_classes().await)
}

pub async fn create(State(state): State<AppState>, Json(new): Json<NewClass>) -> Json<Value> {
    let doc = state.store.insert_class(new).await;
    Json(json!({ "insertedId": doc.id }))
}

/// Token-protected patch: applies the optional moderation fields and bumps
/// the enrollment counter by exactly one.
pub async fn update(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(id): Path<String>,
    Json(patch): Json<ClassPatch>,
) -> AppResult<Json<ClassDoc>> {
    state
        .store
        .patch_class(&id, patch)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("class"))
}
