//! User collection handlers and the self-report role endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::AppState;
use crate::error::{AppError, AppResult};
use crate::identity::{report_role, RequestContext};
use crate::store::{NewUser, Role, RolePatch, UpsertOutcome, UserDoc};

pub async fn list(State(state): State<AppState>) -> Json<Vec<UserDoc>> {
    Json(state.store.list_users().await)
}

/// Upsert-by-email: a second call with a known email performs no write and
/// answers with an "already exists" indication.
pub async fn create(State(state): State<AppState>, Json(new): Json<NewUser>) -> Json<Value> {
    match state.store.insert_user_if_absent(new).await {
        UpsertOutcome::Inserted(user) => Json(json!({ "insertedId": user.id })),
        UpsertOutcome::AlreadyExists => {
            Json(json!({ "message": "user already exists", "insertedId": Value::Null }))
        }
    }
}

pub async fn set_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RolePatch>,
) -> AppResult<Json<UserDoc>> {
    state
        .store
        .set_user_role(&id, patch.role)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("user"))
}

pub async fn report_admin(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(email): Path<String>,
) -> AppResult<Json<Value>> {
    let is = report_role(&state.store, &ctx, &email, Role::Admin).await?;
    Ok(Json(json!({ "admin": is })))
}

pub async fn report_instructor(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(email): Path<String>,
) -> AppResult<Json<Value>> {
    let is = report_role(&state.store, &ctx, &email, Role::Instructor).await?;
    Ok(Json(json!({ "instructor": is })))
}

pub async fn report_student(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(email): Path<String>,
) -> AppResult<Json<Value>> {
    let is = report_role(&state.store, &ctx, &email, Role::Student).await?;
    Ok(Json(json!({ "student": is })))
}
