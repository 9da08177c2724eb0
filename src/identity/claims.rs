//! Identity claims and the request-scoped authorization context.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use super::token::TokenIssuer;
use crate::error::AppError;

/// Claims embedded in a signed session token. The core consumes only the
/// email; the expiry metadata is enforced during verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Carrier of the verified claims for the lifetime of one request. Created
/// by token verification, passed explicitly into every downstream gate and
/// handler, dropped when the request completes. Never persisted.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub claims: Claims,
}

impl RequestContext {
    pub fn email(&self) -> &str {
        &self.claims.email
    }
}

/// Extracting a `RequestContext` is what marks a route as token-protected:
/// the `Authorization` header is verified before the handler body runs, so a
/// handler holding a context always holds a verified, non-expired claim.
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
    TokenIssuer: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let issuer = TokenIssuer::from_ref(state);
        let header = parts.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        let claims = issuer.verify_header(header)?;
        Ok(RequestContext { claims })
    }
}
