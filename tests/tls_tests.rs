#![cfg(feature = "ssr")]

#[cfg(test)]
pub mod tls_tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use devfolio::common::errors::StartupError;
    use devfolio::web::tls::load_server_config;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn test_missing_material_fails_fast() {
        let missing = Path::new("definitely-missing-key.pem");
        let err = load_server_config(missing, missing).expect_err("missing material is fatal");
        assert!(matches!(err, StartupError::TlsMaterialMissing(_)));
    }

    #[test]
    fn test_missing_cert_is_reported_even_with_a_key() {
        let key = scratch_file("devfolio-tls-test-key.pem", "not a key");
        let err = load_server_config(&key, Path::new("devfolio-no-such-cert.pem"))
            .expect_err("missing cert is fatal");
        assert!(matches!(err, StartupError::TlsMaterialMissing(path) if path.ends_with("devfolio-no-such-cert.pem")));
    }

    #[test]
    fn test_garbage_material_is_rejected() {
        let key = scratch_file("devfolio-tls-garbage-key.pem", "not a key");
        let cert = scratch_file("devfolio-tls-garbage-cert.pem", "not a cert");

        let err = load_server_config(&key, &cert).expect_err("garbage material is fatal");
        assert!(matches!(err, StartupError::InvalidTlsMaterial(_)));
    }
}
