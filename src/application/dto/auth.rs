use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claim set embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub uid: i64,
    pub email: String,
    pub app_id: i64,
    /// Expiration as Unix seconds.
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
