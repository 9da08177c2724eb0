//! Payment handlers: intent creation (pass-through to the provider),
//! payment recording, and the ownership-gated history listing.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{AppState, OwnerQuery};
use crate::error::AppResult;
use crate::identity::{require_owner, RequestContext};
use crate::store::{new_id, NewPayment, PaymentDoc};

#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    pub price: f64,
}

/// Delegate to the external payment provider and relay the client secret.
pub async fn create_intent(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Json(req): Json<IntentRequest>,
) -> AppResult<Json<Value>> {
    let client_secret = state.payments.create_intent(req.price).await?;
    Ok(Json(json!({ "clientSecret": client_secret })))
}

/// Record a confirmed payment and drop the cart entry it paid for.
pub async fn record(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Json(new): Json<NewPayment>,
) -> AppResult<Json<Value>> {
    let doc = PaymentDoc {
        id: new_id(),
        email: new.email,
        transaction_id: new.transaction_id,
        price: new.price,
        class_id: new.class_id,
        cart_id: new.cart_id.clone(),
        date: Utc::now(),
    };
    let payment = state.store.insert_payment(doc).await;
    let cart_deleted = state.store.delete_cart(&new.cart_id).await.is_some();
    Ok(Json(json!({ "insertedId": payment.id, "cartDeleted": cart_deleted })))
}

pub async fn history(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<OwnerQuery>,
) -> AppResult<Json<Vec<PaymentDoc>>> {
    let Some(email) = query.email else {
        return Ok(Json(Vec::new()));
    };
    require_owner(&ctx, &email)?;
    Ok(Json(state.store.payments_for(&email).await))
}
