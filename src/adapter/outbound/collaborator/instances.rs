//! Instance registries backed by one directory per instance.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::port::outbound::{InstanceRegistry, InstanceScope};

/// Sub-directory of the data directory for each scope.
#[must_use]
pub const fn scope_dir(scope: InstanceScope) -> &'static str {
    match scope {
        InstanceScope::Single => "instances",
        InstanceScope::Multi => "multi",
        InstanceScope::V7 => "run_v7",
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryInstances {
    root: PathBuf,
    names: Vec<String>,
}

impl DirectoryInstances {
    /// Scan `{data_dir}/{scope dir}`. A missing directory holds no
    /// instances.
    pub fn scan(data_dir: &Path, scope: InstanceScope) -> Result<Self> {
        let root = data_dir.join(scope_dir(scope));
        let mut names = Vec::new();
        if root.is_dir() {
            for entry in fs::read_dir(&root)? {
                let entry = entry?;
                if entry.file_type()?.is_dir() {
                    names.push(entry.file_name().to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        debug!(root = %root.display(), count = names.len(), "Scanned instances");
        Ok(Self { root, names })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl InstanceRegistry for DirectoryInstances {
    fn names(&self) -> Vec<String> {
        self.names.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sub_directories_only() {
        let data = tempfile::tempdir().unwrap();
        let root = data.path().join("run_v7");
        fs::create_dir_all(root.join("bybit_btc")).unwrap();
        fs::create_dir_all(root.join("binance_eth")).unwrap();
        fs::write(root.join("notes.txt"), "x").unwrap();

        let instances = DirectoryInstances::scan(data.path(), InstanceScope::V7).unwrap();

        assert_eq!(instances.names(), vec!["binance_eth", "bybit_btc"]);
        assert_eq!(instances.len(), 2);
    }

    #[test]
    fn missing_directory_is_empty() {
        let data = tempfile::tempdir().unwrap();
        let instances = DirectoryInstances::scan(data.path(), InstanceScope::Multi).unwrap();
        assert!(instances.is_empty());
        assert_eq!(instances.root(), data.path().join("multi"));
    }
}
