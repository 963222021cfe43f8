//! Secrets file adapter.
//!
//! A flat TOML table; the console password lives under `password`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SecretsError;
use crate::port::outbound::SecretsStore;

#[derive(Debug, Clone)]
pub struct SecretsFile {
    path: PathBuf,
}

impl SecretsFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&self, contents: &str) -> Result<(), SecretsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SecretsError::Write {
                path: parent.display().to_string(),
                source,
            })?;
        }
        fs::write(&self.path, contents).map_err(|source| SecretsError::Write {
            path: self.display(),
            source,
        })
    }
}

impl SecretsStore for SecretsFile {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn create_empty(&self) -> Result<(), SecretsError> {
        self.write("")
    }

    fn load(&self) -> Result<toml::Table, SecretsError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SecretsError::Read {
            path: self.display(),
            source,
        })?;
        raw.parse::<toml::Table>()
            .map_err(|source| SecretsError::Malformed {
                path: self.display(),
                source,
            })
    }

    fn save(&self, secrets: &toml::Table) -> Result<(), SecretsError> {
        let encoded = toml::to_string(secrets).map_err(|source| SecretsError::Encode {
            path: self.display(),
            source,
        })?;
        self.write(&encoded)
    }
}
