//! TOML file settings store.
//!
//! One table per section:
//!
//! ```toml
//! [main]
//! pbdir = "/home/trader/passivbot"
//! role = "master"
//! ```
//!
//! Every write loads the whole file, changes one key and writes it back.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SettingsError};
use crate::port::outbound::SettingsStore;

#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> std::result::Result<toml::Table, SettingsError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.display(),
            source,
        })?;
        raw.parse::<toml::Table>()
            .map_err(|source| SettingsError::Parse {
                path: self.display(),
                source,
            })
    }

    fn store(&self, table: &toml::Table) -> std::result::Result<(), SettingsError> {
        let encoded = toml::to_string(table).map_err(|source| SettingsError::Encode {
            path: self.display(),
            source,
        })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.display().to_string(),
                source,
            })?;
        }
        fs::write(&self.path, encoded).map_err(|source| SettingsError::Write {
            path: self.display(),
            source,
        })
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>> {
        let table = self.load()?;
        let value = table
            .get(section)
            .and_then(toml::Value::as_table)
            .and_then(|section| section.get(key));
        Ok(value.map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn set(&self, section: &str, key: &str, value: &str) -> Result<()> {
        let mut table = self.load()?;
        let entry = table
            .entry(section.to_string())
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        let section_table = entry
            .as_table_mut()
            .ok_or_else(|| SettingsError::SectionNotTable {
                section: section.to_string(),
            })?;
        section_table.insert(key.to_string(), toml::Value::String(value.to_string()));
        self.store(&table)?;
        Ok(())
    }
}
