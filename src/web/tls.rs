//! rustls assembly for the HTTPS endpoint: ALPN order, protocol range,
//! and cipher preference are configuration ported from the deployment
//! this replaces; everything else is the provider's default.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use rustls::crypto::{ring, CryptoProvider};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{version, ServerConfig, SupportedCipherSuite, SupportedProtocolVersion};

use crate::common::errors::StartupError;

/// ALPN preference: negotiate the multiplexed protocol first, keep
/// HTTP/1.1 as the legacy fallback.
const ALPN_PROTOCOLS: [&[u8]; 2] = [b"h2", b"http/1.1"];

/// Accepted protocol range: TLS 1.2 through TLS 1.3.
static PROTOCOL_VERSIONS: &[&SupportedProtocolVersion] = &[&version::TLS13, &version::TLS12];

/// Ordered cipher preference: TLS 1.3 suites first, ECDHE suites for the
/// TLS 1.2 fallback.
fn preferred_cipher_suites() -> Vec<SupportedCipherSuite> {
    use rustls::crypto::ring::cipher_suite;

    vec![
        cipher_suite::TLS13_AES_128_GCM_SHA256,
        cipher_suite::TLS13_AES_256_GCM_SHA384,
        cipher_suite::TLS13_CHACHA20_POLY1305_SHA256,
        cipher_suite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        cipher_suite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        cipher_suite::TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
    ]
}

/// Builds the server TLS configuration. Missing or unreadable material is
/// a [`StartupError`]; callers treat every variant as fatal.
pub fn load_server_config(key_path: &Path, cert_path: &Path) -> Result<ServerConfig, StartupError> {
    for path in [key_path, cert_path] {
        if !path.exists() {
            return Err(StartupError::TlsMaterialMissing(path.to_path_buf()));
        }
    }

    let certs = read_certs(cert_path)?;
    let key = read_key(key_path)?;

    let provider = CryptoProvider {
        cipher_suites: preferred_cipher_suites(),
        ..ring::default_provider()
    };

    let mut config = ServerConfig::builder_with_provider(Arc::new(provider))
        .with_protocol_versions(PROTOCOL_VERSIONS)?
        .with_no_client_auth()
        .with_single_cert(certs, key)?;

    config.alpn_protocols = ALPN_PROTOCOLS.iter().map(|proto| proto.to_vec()).collect();
    Ok(config)
}

fn open(path: &Path) -> Result<BufReader<File>, StartupError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| StartupError::TlsMaterialUnreadable {
            path: path.to_path_buf(),
            source,
        })
}

fn read_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>, StartupError> {
    let mut reader = open(path)?;
    let certs = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| StartupError::TlsMaterialUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    if certs.is_empty() {
        return Err(StartupError::InvalidTlsMaterial(format!(
            "no certificates in {}",
            path.display()
        )));
    }
    Ok(certs)
}

fn read_key(path: &Path) -> Result<PrivateKeyDer<'static>, StartupError> {
    let mut reader = open(path)?;
    rustls_pemfile::private_key(&mut reader)
        .map_err(|source| StartupError::TlsMaterialUnreadable {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| {
            StartupError::InvalidTlsMaterial(format!("no private key in {}", path.display()))
        })
}
