//! Environment configuration for the Guru server.
//! All settings come from environment variables with development defaults so
//! a bare `cargo run` brings the server up locally.

fn parse_port_env(name: &str) -> Option<u16> {
    match std::env::var(name) {
        Ok(val) => val.parse::<u16>().ok(),
        Err(_) => None,
    }
}

fn parse_i64_env(name: &str) -> Option<i64> {
    match std::env::var(name) {
        Ok(val) => val.parse::<i64>().ok(),
        Err(_) => None,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listening port (env: GURU_PORT, default 3030).
    pub port: u16,
    /// Secret used to sign and verify session tokens (env: GURU_JWT_SECRET).
    pub jwt_secret: String,
    /// Token validity window in hours (env: GURU_TOKEN_TTL_HOURS, default 10).
    pub token_ttl_hours: i64,
    /// Payment provider secret key (env: GURU_PAYMENT_SECRET_KEY).
    pub payment_secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: parse_port_env("GURU_PORT").unwrap_or(3030),
            jwt_secret: std::env::var("GURU_JWT_SECRET")
                .unwrap_or_else(|_| "guru-dev-secret".to_string()),
            token_ttl_hours: parse_i64_env("GURU_TOKEN_TTL_HOURS").unwrap_or(10),
            payment_secret_key: std::env::var("GURU_PAYMENT_SECRET_KEY").unwrap_or_default(),
        }
    }
}
