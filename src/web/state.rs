use std::sync::Arc;

use crate::services::auth::{
    AdminAuthenticator, AdminCredentials, AuthVerifier, PrefixTokenVerifier,
};

/// Shared application state for the API handlers.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<AdminAuthenticator>,
    pub verifier: Arc<dyn AuthVerifier>,
}

impl AppState {
    pub fn new(authenticator: AdminAuthenticator, verifier: impl AuthVerifier + 'static) -> Self {
        Self {
            authenticator: Arc::new(authenticator),
            verifier: Arc::new(verifier),
        }
    }

    /// Environment-configured credentials with the stock prefix verifier.
    pub fn from_env() -> Self {
        Self::new(
            AdminAuthenticator::new(AdminCredentials::from_env()),
            PrefixTokenVerifier,
        )
    }
}
