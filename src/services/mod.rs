pub mod auth;

pub use auth::{AdminAuthenticator, AdminCredentials, AuthVerifier, PrefixTokenVerifier};
