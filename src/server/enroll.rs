//! Enrollment handlers: record on successful payment, list per owner.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use super::{AppState, OwnerQuery};
use crate::error::AppResult;
use crate::identity::{require_owner, RequestContext};
use crate::store::{new_id, EnrollmentDoc, NewEnrollment};

pub async fn record(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Json(new): Json<NewEnrollment>,
) -> AppResult<Json<Value>> {
    let doc = EnrollmentDoc {
        id: new_id(),
        email: new.email,
        class_id: new.class_id,
        class_name: new.class_name,
        date: Utc::now(),
    };
    let enrollment = state.store.insert_enrollment(doc).await;
    Ok(Json(json!({ "insertedId": enrollment.id })))
}

pub async fn list(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<OwnerQuery>,
) -> AppResult<Json<Vec<EnrollmentDoc>>> {
    let Some(email) = query.email else {
        return Ok(Json(Vec::new()));
    };
    require_owner(&ctx, &email)?;
    Ok(Json(state.store.enrollments_for(&email).await))
}
