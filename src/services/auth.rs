use chrono::Utc;
use uuid::Uuid;

use crate::types::AdminIdentity;

/// Prefix shared by every issued admin token.
pub const TOKEN_PREFIX: &str = "admin-token-";

/// The credential pair the login endpoint accepts.
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// `ADMIN_USERNAME` / `ADMIN_PASSWORD` overrides, falling back to the
    /// stock demo pair.
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
        }
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

/// A freshly authenticated admin session: the issued token plus the
/// identity it nominally belongs to.
#[derive(Clone, Debug)]
pub struct IssuedSession {
    pub token: String,
    pub identity: AdminIdentity,
}

/// Checks login requests against the configured credential pair.
pub struct AdminAuthenticator {
    credentials: AdminCredentials,
}

impl AdminAuthenticator {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self { credentials }
    }

    /// Exact-match credential check; a success issues a fresh opaque token.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<IssuedSession> {
        (username == self.credentials.username && password == self.credentials.password).then(
            || IssuedSession {
                token: issue_token(),
                identity: AdminIdentity::admin(),
            },
        )
    }
}

/// `admin-token-<millis>-<random>`: opaque, unsigned, no claims. Issuance
/// is the only side-effecting part of the auth flow and it is stateless;
/// nothing is recorded server-side.
fn issue_token() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}{}-{}",
        TOKEN_PREFIX,
        Utc::now().timestamp_millis(),
        &suffix[..9]
    )
}

/// Capability for turning a bearer token into an identity.
pub trait AuthVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Option<AdminIdentity>;
}

/// Accepts any token carrying the issued prefix.
///
/// Tokens are never looked up or cryptographically checked, so ANY string
/// starting with `admin-token-` passes regardless of issuance, and the
/// returned identity is always the fixed admin record rather than
/// anything derived from the token. That matches the deployment this
/// replaces; swap in a real verifier behind [`AuthVerifier`] before
/// guarding anything worth protecting.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefixTokenVerifier;

impl AuthVerifier for PrefixTokenVerifier {
    fn verify(&self, token: &str) -> Option<AdminIdentity> {
        token.starts_with(TOKEN_PREFIX).then(AdminIdentity::admin)
    }
}
