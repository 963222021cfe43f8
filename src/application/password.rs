//! Password change.

use tracing::{info, warn};

use crate::application::session::SessionContext;
use crate::error::{PasswordChangeError, SecretsError};
use crate::port::outbound::{SecretsStore, PASSWORD_KEY};

/// The three inputs of the change-password form.
#[derive(Clone, Default)]
pub struct PasswordChangeRequest {
    /// Must equal the stored password; empty when none is set.
    pub current: String,
    /// Password to store.
    pub new: String,
    /// Must equal `new`.
    pub confirm: String,
}

impl std::fmt::Debug for PasswordChangeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordChangeRequest { .. }")
    }
}

/// A completed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChanged {
    /// The secrets file did not exist and was created empty first.
    pub secrets_created: bool,
}

/// Replace the stored password and clear the session.
///
/// Rejections leave the secrets file and the session untouched. A missing
/// secrets file is created empty and reported through
/// [`PasswordChanged::secrets_created`].
pub fn change_password(
    secrets: &dyn SecretsStore,
    request: &PasswordChangeRequest,
    session: &mut SessionContext,
) -> Result<PasswordChanged, PasswordChangeError> {
    let stored = secrets.password().map_err(classify)?.unwrap_or_default();
    if request.current != stored {
        warn!("Password change rejected: current password mismatch");
        return Err(PasswordChangeError::AuthMismatch);
    }
    if request.new != request.confirm {
        return Err(PasswordChangeError::ConfirmMismatch);
    }

    let secrets_created = !secrets.exists();
    if secrets_created {
        warn!("Secrets file does not exist, creating it");
        secrets.create_empty().map_err(PasswordChangeError::Update)?;
    }

    let mut table = secrets.load().map_err(classify)?;
    table.insert(
        PASSWORD_KEY.to_string(),
        toml::Value::String(request.new.clone()),
    );
    secrets.save(&table).map_err(PasswordChangeError::Update)?;

    session.clear();
    info!("Password updated, session cleared");
    Ok(PasswordChanged { secrets_created })
}

fn classify(err: SecretsError) -> PasswordChangeError {
    match err {
        SecretsError::Malformed { .. } => PasswordChangeError::MalformedSecrets(err),
        other => PasswordChangeError::Update(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::secrets::SecretsFile;
    use std::fs;

    fn request(current: &str, new: &str, confirm: &str) -> PasswordChangeRequest {
        PasswordChangeRequest {
            current: current.into(),
            new: new.into(),
            confirm: confirm.into(),
        }
    }

    #[test]
    fn wrong_current_password_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "password = \"old\"\n").unwrap();
        let secrets = SecretsFile::new(&path);
        let mut session = SessionContext::new();
        session.logged_in = true;

        let err = change_password(&secrets, &request("nope", "a", "a"), &mut session).unwrap_err();

        assert!(matches!(err, PasswordChangeError::AuthMismatch));
        assert!(session.logged_in);
        assert_eq!(fs::read_to_string(&path).unwrap(), "password = \"old\"\n");
    }

    #[test]
    fn malformed_secrets_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "password = \n[[[").unwrap();
        let secrets = SecretsFile::new(&path);
        let mut session = SessionContext::new();

        let err = change_password(&secrets, &request("", "a", "a"), &mut session).unwrap_err();

        assert!(matches!(err, PasswordChangeError::MalformedSecrets(_)));
    }

    #[test]
    fn missing_file_is_created_and_change_proceeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".pbgui/secrets.toml");
        let secrets = SecretsFile::new(&path);
        let mut session = SessionContext::new();
        session.logged_in = true;

        let changed = change_password(&secrets, &request("", "s3cret", "s3cret"), &mut session)
            .unwrap();

        assert!(changed.secrets_created);
        assert_eq!(secrets.password().unwrap().as_deref(), Some("s3cret"));
        assert!(!session.logged_in);
    }

    #[test]
    fn debug_hides_passwords() {
        let rendered = format!("{:?}", request("hunter2", "x", "x"));
        assert_eq!(rendered, "PasswordChangeRequest { .. }");
    }
}
