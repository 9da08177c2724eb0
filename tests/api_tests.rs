//! End-to-end API tests for the resource handlers: classes, users, carts,
//! payments, and enrollments, including the scenarios the frontend relies
//! on (cart checkout, class moderation, payment history).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use guru::identity::TokenIssuer;
use guru::payment::StaticPaymentProvider;
use guru::server::{router, AppState};
use guru::store::Store;

const SECRET: &str = "test-secret";

fn test_app() -> Router {
    let state = AppState {
        store: Arc::new(Store::new()),
        tokens: TokenIssuer::new(SECRET, 10),
        payments: Arc::new(StaticPaymentProvider),
    };
    router(state)
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(header_value) = auth {
        builder = builder.header(header::AUTHORIZATION, header_value);
    }
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn token_for(email: &str) -> String {
    let token = TokenIssuer::new(SECRET, 10).issue(email).unwrap();
    format!("Bearer {token}")
}

async fn create_class(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/classes",
        None,
        Some(json!({
            "name": "Violin 101",
            "instructorName": "Ada",
            "instructorEmail": "ada@example.com",
            "availableSeats": 10,
            "price": 49.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["insertedId"].as_str().expect("insertedId").to_string()
}

#[tokio::test]
async fn root_reports_liveness() {
    let app = test_app();
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Guru is running...");
}

#[tokio::test]
async fn class_patch_sets_status_and_increments_enrolled_once() {
    let app = test_app();
    let id = create_class(&app).await;
    let auth = token_for("moderator@example.com");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/classes/{id}"),
        Some(&auth),
        Some(json!({ "status": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");
    assert_eq!(body["enrolled"], 1);

    let (status, body) = send(&app, "GET", "/classes", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let classes = body.as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["status"], "approved");
    assert_eq!(classes[0]["enrolled"], 1);
}

#[tokio::test]
async fn class_patch_unknown_id_is_404() {
    let app = test_app();
    let auth = token_for("moderator@example.com");
    let (status, _) =
        send(&app, "PATCH", "/classes/missing", Some(&auth), Some(json!({ "feedback": "?" })))
            .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_upsert_is_idempotent_over_http() {
    let app = test_app();
    let payload = json!({ "name": "Alice", "email": "alice@example.com" });

    let (status, body) = send(&app, "POST", "/users", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["insertedId"].is_string());

    let (status, body) = send(&app, "POST", "/users", None, Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "user already exists");
    assert!(body["insertedId"].is_null());

    let (_, body) = send(&app, "GET", "/users", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn set_role_unknown_user_is_404() {
    let app = test_app();
    let (status, _) =
        send(&app, "PATCH", "/users/missing", None, Some(json!({ "role": "admin" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cart_checkout_scenario() {
    let app = test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/carts",
        None,
        Some(json!({ "classId": "c1", "email": "bob@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Owner sees exactly their entry.
    let bob = token_for("bob@example.com");
    let (status, body) =
        send(&app, "GET", "/carts?email=bob@example.com", Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    let carts = body.as_array().unwrap();
    assert_eq!(carts.len(), 1);
    assert_eq!(carts[0]["classId"], "c1");
    assert_eq!(carts[0]["email"], "bob@example.com");

    // A different identity is denied.
    let eve = token_for("eve@example.com");
    let (status, _) = send(&app, "GET", "/carts?email=bob@example.com", Some(&eve), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn cart_delete_removes_entry_and_404s_after() {
    let app = test_app();
    let (_, body) = send(
        &app,
        "POST",
        "/carts",
        None,
        Some(json!({ "classId": "c1", "email": "bob@example.com" })),
    )
    .await;
    let id = body["insertedId"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "DELETE", &format!("/carts/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classId"], "c1");

    let (status, _) = send(&app, "DELETE", &format!("/carts/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn payment_intent_returns_client_secret() {
    let app = test_app();
    let auth = token_for("bob@example.com");
    let (status, body) =
        send(&app, "POST", "/create-payment-intent", Some(&auth), Some(json!({ "price": 49.5 })))
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientSecret"], "pi_test_secret_4950");
}

#[tokio::test]
async fn recording_a_payment_deletes_the_cart_entry() {
    let app = test_app();
    let (_, body) = send(
        &app,
        "POST",
        "/carts",
        None,
        Some(json!({ "classId": "c1", "email": "bob@example.com" })),
    )
    .await;
    let cart_id = body["insertedId"].as_str().unwrap().to_string();

    let bob = token_for("bob@example.com");
    let (status, body) = send(
        &app,
        "POST",
        "/payments",
        Some(&bob),
        Some(json!({
            "email": "bob@example.com",
            "transactionId": "tx_1",
            "price": 49.5,
            "classId": "c1",
            "cartId": cart_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cartDeleted"], true);

    // The cart is now empty and the payment shows in the owner's history.
    let (status, body) =
        send(&app, "GET", "/carts?email=bob@example.com", Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) =
        send(&app, "GET", "/payment?email=bob@example.com", Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    let payments = body.as_array().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0]["transactionId"], "tx_1");
}

#[tokio::test]
async fn enrollment_records_are_ownership_scoped() {
    let app = test_app();
    let bob = token_for("bob@example.com");

    let (status, _) = send(
        &app,
        "POST",
        "/enrollmentClass",
        Some(&bob),
        Some(json!({ "email": "bob@example.com", "classId": "c1", "className": "Violin 101" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        send(&app, "GET", "/enrollClass?email=bob@example.com", Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    let enrollments = body.as_array().unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0]["className"], "Violin 101");

    let eve = token_for("eve@example.com");
    let (status, _) =
        send(&app, "GET", "/enrollClass?email=bob@example.com", Some(&eve), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
