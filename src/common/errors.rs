use thiserror::Error;

/// Failures that abort startup before a socket is bound.
#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("TLS material not found: {}", .0.display())]
    TlsMaterialMissing(std::path::PathBuf),

    #[error("failed to read TLS material {}: {source}", .path.display())]
    TlsMaterialUnreadable {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TLS material: {0}")]
    InvalidTlsMaterial(String),

    #[error("TLS configuration rejected: {0}")]
    Tls(#[from] rustls::Error),
}

/// Authorization failures on guarded routes. `Display` is the exact
/// `error` string the 401 body carries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header missing")]
    MissingHeader,

    #[error("Invalid or expired token")]
    InvalidToken,
}
