//! Payment-intent integration.
//! The backend never touches card data: it asks the provider for a payment
//! intent and relays the client secret back to the frontend, which confirms
//! the payment directly with the provider.

use async_trait::async_trait;

use crate::error::{AppError, AppResult};

const DEFAULT_ENDPOINT: &str = "https://api.stripe.com/v1/payment_intents";

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a payment intent for the given amount in major currency units
    /// and return the client secret the frontend confirms against.
    async fn create_intent(&self, amount: f64) -> AppResult<String>;
}

/// HTTP provider speaking the payment service's form-encoded API.
pub struct HttpPaymentProvider {
    client: reqwest::Client,
    secret_key: String,
    endpoint: String,
}

impl HttpPaymentProvider {
    pub fn new(secret_key: String) -> Self {
        Self::with_endpoint(secret_key, DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(secret_key: String, endpoint: String) -> Self {
        Self { client: reqwest::Client::new(), secret_key, endpoint }
    }
}

#[async_trait]
impl PaymentProvider for HttpPaymentProvider {
    async fn create_intent(&self, amount: f64) -> AppResult<String> {
        // The provider expects the amount in the currency's smallest unit.
        let amount_minor = (amount * 100.0).round() as i64;
        let params = [
            ("amount", amount_minor.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];
        let resp = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Payment(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(AppError::Payment(format!("provider returned {}", resp.status())));
        }
        let body: serde_json::Value =
            resp.json().await.map_err(|e| AppError::Payment(e.to_string()))?;
        body.get("client_secret")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| AppError::Payment("provider response missing client_secret".into()))
    }
}

/// Deterministic provider for tests and offline development.
pub struct StaticPaymentProvider;

#[async_trait]
impl PaymentProvider for StaticPaymentProvider {
    async fn create_intent(&self, amount: f64) -> AppResult<String> {
        let amount_minor = (amount * 100.0).round() as i64;
        Ok(format!("pi_test_secret_{amount_minor}"))
    }
}
