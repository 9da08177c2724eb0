//! Session token issuance and verification.
//! Both halves share one HS256 secret and run entirely in-process, so
//! verification completes before any store access on protected routes.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::claims::Claims;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Mint a signed token for the supplied identity. The email is trusted
    /// verbatim; no authenticity check happens before signing.
    pub fn issue(&self, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("token encoding failed: {e}")))
    }

    /// Verify a raw `Authorization` header value of the form
    /// `<scheme> <token>`. The scheme is ignored; the second
    /// whitespace-separated segment is the token. Fails closed on a missing
    /// header or missing token segment.
    pub fn verify_header(&self, header: Option<&str>) -> AppResult<Claims> {
        let header = header.ok_or(AppError::MissingCredentials)?;
        let token = header.split_whitespace().nth(1).ok_or(AppError::MissingCredentials)?;
        self.verify(token)
    }

    /// Verify a bare token: signature and expiry.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AppError::InvalidToken(e.to_string()))?;
        Ok(data.claims)
    }
}
