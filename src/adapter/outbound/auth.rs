//! Password gate backed by the secrets file.

use std::sync::Arc;

use tracing::warn;

use crate::port::outbound::{AuthGate, AuthStatus, SecretsStore};

/// Resolves sessions against the password in the secrets store.
///
/// No password means open access. An unreadable secrets file locks the
/// console.
pub struct SecretsAuthGate {
    secrets: Arc<dyn SecretsStore>,
}

impl SecretsAuthGate {
    pub fn new(secrets: Arc<dyn SecretsStore>) -> Self {
        Self { secrets }
    }

    /// The stored password, `Some(None)` when none is set, or `None`
    /// when the secrets file cannot be read.
    fn stored(&self) -> Option<Option<String>> {
        match self.secrets.password() {
            Ok(password) => Some(password),
            Err(e) => {
                warn!(error = %e, "Failed to read password");
                None
            }
        }
    }
}

impl AuthGate for SecretsAuthGate {
    fn status(&self, logged_in: bool) -> AuthStatus {
        match self.stored() {
            Some(None) => AuthStatus::PasswordMissing,
            Some(Some(_)) if logged_in => AuthStatus::Authenticated,
            Some(Some(_)) | None => AuthStatus::Required,
        }
    }

    fn verify(&self, attempt: &str) -> bool {
        matches!(self.stored(), Some(Some(password)) if password == attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::secrets::SecretsFile;

    fn gate(dir: &tempfile::TempDir, contents: Option<&str>) -> SecretsAuthGate {
        let path = dir.path().join("secrets.toml");
        if let Some(contents) = contents {
            std::fs::write(&path, contents).unwrap();
        }
        SecretsAuthGate::new(Arc::new(SecretsFile::new(path)))
    }

    #[test]
    fn missing_password_opens_access() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(gate(&dir, None).status(false), AuthStatus::PasswordMissing);

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            gate(&dir, Some("other = 1\n")).status(false),
            AuthStatus::PasswordMissing
        );
    }

    #[test]
    fn password_requires_login() {
        let dir = tempfile::tempdir().unwrap();
        let gate = gate(&dir, Some("password = \"s3cret\"\n"));
        assert_eq!(gate.status(false), AuthStatus::Required);
        assert_eq!(gate.status(true), AuthStatus::Authenticated);
        assert!(gate.verify("s3cret"));
        assert!(!gate.verify("guess"));
    }

    #[test]
    fn unreadable_secrets_lock_the_console() {
        let dir = tempfile::tempdir().unwrap();
        let gate = gate(&dir, Some("password = [\n"));
        assert_eq!(gate.status(true), AuthStatus::Required);
        assert!(!gate.verify(""));
    }
}
