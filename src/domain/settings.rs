//! Typed record of the `main` settings section.

use super::field::{ConfigField, PathField};
use super::role::Role;

/// Snapshot of every field this console manages.
///
/// Values are kept exactly as persisted; an unset field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainSettings {
    pub pbdir: String,
    pub pbvenv: String,
    pub pb7dir: String,
    pub pb7venv: String,
    pub pbname: String,
    pub role: String,
}

impl MainSettings {
    #[must_use]
    pub fn get(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::PbDir => &self.pbdir,
            ConfigField::PbVenv => &self.pbvenv,
            ConfigField::Pb7Dir => &self.pb7dir,
            ConfigField::Pb7Venv => &self.pb7venv,
            ConfigField::PbName => &self.pbname,
            ConfigField::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: ConfigField, value: impl Into<String>) {
        let slot = match field {
            ConfigField::PbDir => &mut self.pbdir,
            ConfigField::PbVenv => &mut self.pbvenv,
            ConfigField::Pb7Dir => &mut self.pb7dir,
            ConfigField::Pb7Venv => &mut self.pb7venv,
            ConfigField::PbName => &mut self.pbname,
            ConfigField::Role => &mut self.role,
        };
        *slot = value.into();
    }

    #[must_use]
    pub fn path(&self, field: PathField) -> &str {
        self.get(field.config_field())
    }

    /// Parsed role, or `None` when the stored value is not a role.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}
