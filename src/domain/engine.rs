//! Wrapped trading engine generations.

use std::fmt;
use std::path::{Path, PathBuf};

use super::field::PathField;

/// A generation of the wrapped Passivbot engine.
///
/// Both generations are installed side by side; each has its own install
/// directory and its own interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    V6,
    V7,
}

impl Engine {
    /// All generations in validation order.
    pub const ALL: [Engine; 2] = [Engine::V6, Engine::V7];

    /// Human-readable label used in reasons and form captions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::V6 => "Passivbot V6",
            Self::V7 => "Passivbot V7",
        }
    }

    /// Entry point location relative to the install directory.
    ///
    /// V7 keeps its sources one directory deeper.
    #[must_use]
    pub const fn entry_point(self) -> &'static str {
        match self {
            Self::V6 => "passivbot.py",
            Self::V7 => "src/passivbot.py",
        }
    }

    /// Resolve the entry point under an install directory.
    #[must_use]
    pub fn entry_point_path(self, install_dir: &Path) -> PathBuf {
        install_dir.join(self.entry_point())
    }

    /// Install directory field for this generation.
    #[must_use]
    pub const fn dir_field(self) -> PathField {
        match self {
            Self::V6 => PathField::PbDir,
            Self::V7 => PathField::Pb7Dir,
        }
    }

    /// Interpreter field for this generation.
    #[must_use]
    pub const fn venv_field(self) -> PathField {
        match self {
            Self::V6 => PathField::PbVenv,
            Self::V7 => PathField::Pb7Venv,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
