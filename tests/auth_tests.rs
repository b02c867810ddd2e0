#![cfg(feature = "ssr")]

#[cfg(test)]
pub mod auth_tests {
    use devfolio::services::auth::{
        AdminAuthenticator, AdminCredentials, AuthVerifier, PrefixTokenVerifier, TOKEN_PREFIX,
    };
    use devfolio::types::AdminIdentity;

    fn authenticator() -> AdminAuthenticator {
        AdminAuthenticator::new(AdminCredentials::default())
    }

    #[test]
    fn test_authenticate_accepts_configured_pair() {
        let session = authenticator()
            .authenticate("admin", "admin123")
            .expect("stock credentials accepted");

        assert!(session.token.starts_with(TOKEN_PREFIX));
        assert_eq!(session.identity.username, "admin");
        assert_eq!(session.identity.role, "administrator");
    }

    #[test]
    fn test_authenticate_rejects_other_pairs() {
        let auth = authenticator();
        assert!(auth.authenticate("admin", "wrong").is_none());
        assert!(auth.authenticate("root", "admin123").is_none());
        assert!(auth.authenticate("", "").is_none());
    }

    #[test]
    fn test_issued_token_shape() {
        let session = authenticator()
            .authenticate("admin", "admin123")
            .expect("stock credentials accepted");

        // admin-token-<millis>-<random>
        let rest = session
            .token
            .strip_prefix(TOKEN_PREFIX)
            .expect("token prefix");
        let (millis, random) = rest.split_once('-').expect("timestamp-random split");
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert!(!random.is_empty());
    }

    #[test]
    fn test_issued_tokens_pass_verification() {
        let session = authenticator()
            .authenticate("admin", "admin123")
            .expect("stock credentials accepted");
        assert!(PrefixTokenVerifier.verify(&session.token).is_some());
    }

    #[test]
    fn test_verifier_only_checks_the_prefix() {
        // Documented limitation: issuance is not tracked, so any string
        // with the right prefix passes.
        let identity = PrefixTokenVerifier
            .verify("admin-token-never-issued")
            .expect("prefix is sufficient");
        assert_eq!(identity, AdminIdentity::admin());
    }

    #[test]
    fn test_verifier_rejects_unprefixed_tokens() {
        assert!(PrefixTokenVerifier.verify("not-a-real-token").is_none());
        assert!(PrefixTokenVerifier.verify("").is_none());
        assert!(PrefixTokenVerifier.verify("ADMIN-TOKEN-123").is_none());
    }

    #[test]
    fn test_admin_permissions() {
        let identity = AdminIdentity::admin();
        for permission in ["read", "write", "delete"] {
            assert!(identity.has_permission(permission));
        }
        assert!(!identity.has_permission("deploy"));
    }
}
