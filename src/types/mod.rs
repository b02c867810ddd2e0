use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin user summary returned by the login endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub username: String,
    pub role: String,
}

/// Identity attached to requests that pass the admin guard.
///
/// Tokens are opaque and carry no claims, so the verifier cannot recover
/// an identity from one; every authorized request gets this fixed admin
/// record. See `services::auth` for the full caveat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminIdentity {
    pub username: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl AdminIdentity {
    /// The one identity this deployment knows about.
    pub fn admin() -> Self {
        Self {
            username: "admin".to_string(),
            role: "administrator".to_string(),
            permissions: vec![
                "read".to_string(),
                "write".to_string(),
                "delete".to_string(),
            ],
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// The reduced shape the login response exposes.
    pub fn summary(&self) -> AdminUser {
        AdminUser {
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

/// Login request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: AdminUser,
    pub timestamp: DateTime<Utc>,
}

/// 401 body for rejected logins.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginFailure {
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

/// 401 body emitted by the admin guard (no timestamp on this surface).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthErrorBody {
    pub error: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub http_version: String,
}

/// Transport facts for the current connection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpVersionInfo {
    pub http_version: String,
    pub protocol: String,
    pub secure: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccessResponse {
    pub message: String,
    pub user: AdminIdentity,
    pub timestamp: DateTime<Utc>,
    pub http_version: String,
}
