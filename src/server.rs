//!
//! Guru HTTP server
//! ----------------
//! Axum-based REST API for the course-enrollment platform.
//!
//! Responsibilities:
//! - Token minting (`POST /jwt`) and verification on protected routes.
//! - Self-report role endpoints and ownership-gated listings.
//! - CRUD handlers per collection, delegated to the sub-modules.
//! - Payment-intent pass-through to the configured provider.
//!
//! Control flow per request: token verification (where the route extracts a
//! `RequestContext`) → role/ownership gates → resource handler. Each gate
//! short-circuits with its mapped status; every path emits exactly one
//! response.

pub mod carts;
pub mod classes;
pub mod enroll;
pub mod payments;
pub mod users;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{FromRef, State};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::identity::TokenIssuer;
use crate::payment::{HttpPaymentProvider, PaymentProvider};
use crate::store::Store;

/// Shared server state injected into all handlers. Opened once at startup
/// and reused; requests perform independent point operations against it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub tokens: TokenIssuer,
    pub payments: Arc<dyn PaymentProvider>,
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

/// Query string for the ownership-gated listings. The email is optional:
/// when absent the listing degrades to an empty result set instead of an
/// error.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/jwt", post(issue_token))
        .route("/users/admin/{email}", get(users::report_admin))
        .route("/users/instructor/{email}", get(users::report_instructor))
        .route("/users/student/{email}", get(users::report_student))
        .route("/classes", get(classes::list).post(classes::create))
        .route("/classes/{id}", patch(classes::update))
        .route("/users", get(users::list).post(users::create))
        .route("/users/{id}", patch(users::set_role))
        .route("/carts", get(carts::list).post(carts::create))
        .route("/carts/{id}", delete(carts::remove))
        .route("/create-payment-intent", post(payments::create_intent))
        .route("/payments", post(payments::record))
        .route("/payment", get(payments::history))
        .route("/enrollmentClass", post(enroll::record))
        .route("/enrollClass", get(enroll::list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the Guru HTTP server with state built from the configuration.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = AppState {
        store: Arc::new(Store::new()),
        tokens: TokenIssuer::new(&config.jwt_secret, config.token_ttl_hours),
        payments: Arc::new(HttpPaymentProvider::new(config.payment_secret_key.clone())),
    };
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Guru listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root() -> &'static str {
    "Guru is running..."
}

/// Mint a session token from a client-supplied identity payload. The payload
/// is trusted verbatim; only its email reaches the claims.
async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<serde_json::Value>> {
    let email = payload
        .get("email")
        .and_then(|v| v.as_str())
        .ok_or_else(|| AppError::BadRequest("identity payload missing email".into()))?;
    let token = state.tokens.issue(email)?;
    Ok(Json(json!({ "token": token })))
}
