//! Persisted configuration fields.
//!
//! Every field is addressed by a `(section, key)` pair in the settings store.

use std::fmt;
use std::str::FromStr;

use super::engine::Engine;
use super::error::DomainError;

/// Section holding all fields this console manages.
pub const MAIN_SECTION: &str = "main";

/// Section and key holding the coin data API key.
pub const COIN_DATA_SECTION: &str = "coinmarketcap";
pub const COIN_DATA_API_KEY: &str = "api_key";

/// A field of the `main` settings section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    PbDir,
    PbVenv,
    Pb7Dir,
    Pb7Venv,
    PbName,
    Role,
}

impl ConfigField {
    pub const ALL: [ConfigField; 6] = [
        ConfigField::PbDir,
        ConfigField::PbVenv,
        ConfigField::Pb7Dir,
        ConfigField::Pb7Venv,
        ConfigField::PbName,
        ConfigField::Role,
    ];

    #[must_use]
    pub const fn section(self) -> &'static str {
        MAIN_SECTION
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PbDir => "pbdir",
            Self::PbVenv => "pbvenv",
            Self::Pb7Dir => "pb7dir",
            Self::Pb7Venv => "pb7venv",
            Self::PbName => "pbname",
            Self::Role => "role",
        }
    }

    /// The path field behind this config field, if it is one.
    #[must_use]
    pub const fn as_path_field(self) -> Option<PathField> {
        match self {
            Self::PbDir => Some(PathField::PbDir),
            Self::PbVenv => Some(PathField::PbVenv),
            Self::Pb7Dir => Some(PathField::Pb7Dir),
            Self::Pb7Venv => Some(PathField::Pb7Venv),
            Self::PbName | Self::Role => None,
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.key())
    }
}

impl FromStr for ConfigField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.strip_prefix("main.").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

/// What a path field is expected to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// An engine install directory.
    Directory,
    /// A Python interpreter binary inside a virtualenv.
    Interpreter,
}

/// The four path-valued fields (install directory and interpreter per engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathField {
    PbDir,
    PbVenv,
    Pb7Dir,
    Pb7Venv,
}

impl PathField {
    /// Reconciliation order.
    pub const ALL: [PathField; 4] = [
        PathField::PbDir,
        PathField::PbVenv,
        PathField::Pb7Dir,
        PathField::Pb7Venv,
    ];

    #[must_use]
    pub const fn config_field(self) -> ConfigField {
        match self {
            Self::PbDir => ConfigField::PbDir,
            Self::PbVenv => ConfigField::PbVenv,
            Self::Pb7Dir => ConfigField::Pb7Dir,
            Self::Pb7Venv => ConfigField::Pb7Venv,
        }
    }

    #[must_use]
    pub const fn engine(self) -> Engine {
        match self {
            Self::PbDir | Self::PbVenv => Engine::V6,
            Self::Pb7Dir | Self::Pb7Venv => Engine::V7,
        }
    }

    #[must_use]
    pub const fn kind(self) -> PathKind {
        match self {
            Self::PbDir | Self::Pb7Dir => PathKind::Directory,
            Self::PbVenv | Self::Pb7Venv => PathKind::Interpreter,
        }
    }

    /// True for install directory fields, whose changes invalidate
    /// collaborators that cache paths derived from them.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self.kind(), PathKind::Directory)
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        self.config_field().key()
    }

    /// Caption shown next to the input on the form.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::PbDir => "Passivbot V6 path",
            Self::PbVenv => "Passivbot V6 python interpreter (venv/bin/python)",
            Self::Pb7Dir => "Passivbot V7 path",
            Self::Pb7Venv => "Passivbot V7 python interpreter (venv/bin/python)",
        }
    }
}

impl fmt::Display for PathField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.config_field().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_match_settings_layout() {
        let keys: Vec<_> = ConfigField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, ["pbdir", "pbvenv", "pb7dir", "pb7venv", "pbname", "role"]);
        assert!(ConfigField::ALL.iter().all(|f| f.section() == "main"));
    }

    #[test]
    fn parse_accepts_bare_and_qualified_keys() {
        assert_eq!("pb7dir".parse::<ConfigField>().unwrap(), ConfigField::Pb7Dir);
        assert_eq!("main.role".parse::<ConfigField>().unwrap(), ConfigField::Role);
        assert!(matches!(
            "pbdirx".parse::<ConfigField>(),
            Err(DomainError::UnknownField(_))
        ));
    }

    #[test]
    fn only_install_dirs_are_directory_fields() {
        let dirs: Vec<_> = PathField::ALL
            .into_iter()
            .filter(|f| f.is_directory())
            .collect();
        assert_eq!(dirs, [PathField::PbDir, PathField::Pb7Dir]);
    }

    #[test]
    fn path_fields_round_trip_through_config_field() {
        for field in PathField::ALL {
            assert_eq!(field.config_field().as_path_field(), Some(field));
        }
        assert_eq!(ConfigField::PbName.as_path_field(), None);
    }
}
