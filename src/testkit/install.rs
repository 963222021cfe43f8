//! Fake engine installs.
//!
//! Lays out both engine generations under one root so every path check
//! passes:
//!
//! ```text
//! root/
//! ├── pb6/passivbot.py
//! ├── pb6/venv/bin/python
//! ├── pb7/src/passivbot.py
//! └── pb7/venv/bin/python3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::PathField;
use crate::error::Result;
use crate::port::outbound::SettingsStore;

#[derive(Debug, Clone)]
pub struct FakeInstall {
    root: PathBuf,
}

impl FakeInstall {
    /// Create the layout under `root`.
    pub fn create(root: &Path) -> Result<Self> {
        let install = Self {
            root: root.to_path_buf(),
        };
        for file in [
            install.path(PathField::PbDir).join("passivbot.py"),
            install.path(PathField::PbVenv),
            install.path(PathField::Pb7Dir).join("src/passivbot.py"),
            install.path(PathField::Pb7Venv),
        ] {
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&file, "")?;
        }
        Ok(install)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the layout puts `field`.
    #[must_use]
    pub fn path(&self, field: PathField) -> PathBuf {
        match field {
            PathField::PbDir => self.root.join("pb6"),
            PathField::PbVenv => self.root.join("pb6/venv/bin/python"),
            PathField::Pb7Dir => self.root.join("pb7"),
            PathField::Pb7Venv => self.root.join("pb7/venv/bin/python3"),
        }
    }

    #[must_use]
    pub fn value(&self, field: PathField) -> String {
        self.path(field).display().to_string()
    }

    /// Persist all four paths plus a name and role.
    pub fn configure(&self, store: &dyn SettingsStore) -> Result<()> {
        for field in PathField::ALL {
            store.set("main", field.key(), &self.value(field))?;
        }
        store.set("main", "pbname", "node1")?;
        store.set("main", "role", "master")?;
        Ok(())
    }
}
