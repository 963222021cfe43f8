//! Secrets file port.

use crate::error::SecretsError;

/// Key holding the console password.
pub const PASSWORD_KEY: &str = "password";

/// Structured key/value secrets, read and written whole.
pub trait SecretsStore: Send + Sync {
    fn exists(&self) -> bool;

    /// Create an empty secrets file.
    fn create_empty(&self) -> Result<(), SecretsError>;

    fn load(&self) -> Result<toml::Table, SecretsError>;

    fn save(&self, secrets: &toml::Table) -> Result<(), SecretsError>;

    /// Stored password, `None` when the file or the key is absent.
    fn password(&self) -> Result<Option<String>, SecretsError> {
        if !self.exists() {
            return Ok(None);
        }
        Ok(self
            .load()?
            .get(PASSWORD_KEY)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }
}
