//! Users read from the engine's API key file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::MainSettings;
use crate::error::Result;
use crate::port::outbound::UserDirectory;

/// File holding one entry per exchange user.
pub const API_KEYS_FILE: &str = "api-keys.json";

/// Reserved top-level key that is not a user.
const RESERVED_KEY: &str = "referrals";

#[derive(Debug, Clone, Default)]
pub struct ApiKeyUsers {
    source: Option<PathBuf>,
    users: Vec<String>,
}

impl ApiKeyUsers {
    /// Load from the V7 directory, falling back to the V6 directory.
    ///
    /// No key file in either directory gives an empty directory. A key file
    /// that is not a JSON object is an error.
    pub fn load(settings: &MainSettings) -> Result<Self> {
        let candidates = [settings.pb7dir.trim(), settings.pbdir.trim()];
        let Some(source) = candidates
            .into_iter()
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(dir).join(API_KEYS_FILE))
            .find(|path| path.is_file())
        else {
            debug!("No API key file found");
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(&source)?;
        let users = parse_users(&raw)?;
        debug!(path = %source.display(), users = users.len(), "Loaded users");
        Ok(Self {
            source: Some(source),
            users,
        })
    }

    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn parse_users(raw: &str) -> Result<Vec<String>> {
    let map: Map<String, Value> = serde_json::from_str(raw)?;
    Ok(map
        .keys()
        .filter(|key| key.as_str() != RESERVED_KEY)
        .cloned()
        .collect())
}

impl UserDirectory for ApiKeyUsers {
    fn list(&self) -> Vec<String> {
        self.users.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn settings(pbdir: &Path, pb7dir: &Path) -> MainSettings {
        MainSettings {
            pbdir: pbdir.display().to_string(),
            pb7dir: pb7dir.display().to_string(),
            ..MainSettings::default()
        }
    }

    #[test]
    fn prefers_v7_keys_and_skips_referrals() {
        let v6 = tempfile::tempdir().unwrap();
        let v7 = tempfile::tempdir().unwrap();
        fs::write(v6.path().join(API_KEYS_FILE), r#"{"old": {}}"#).unwrap();
        fs::write(
            v7.path().join(API_KEYS_FILE),
            r#"{"referrals": {}, "binance_01": {"key": "k"}, "bybit_01": {}}"#,
        )
        .unwrap();

        let users = ApiKeyUsers::load(&settings(v6.path(), v7.path())).unwrap();

        let mut names = users.list();
        names.sort();
        assert_eq!(names, vec!["binance_01", "bybit_01"]);
        assert_eq!(users.source(), Some(v7.path().join(API_KEYS_FILE).as_path()));
    }

    #[test]
    fn falls_back_to_v6_directory() {
        let v6 = tempfile::tempdir().unwrap();
        let v7 = tempfile::tempdir().unwrap();
        fs::write(v6.path().join(API_KEYS_FILE), r#"{"old": {}}"#).unwrap();

        let users = ApiKeyUsers::load(&settings(v6.path(), v7.path())).unwrap();
        assert_eq!(users.list(), vec!["old"]);
    }

    #[test]
    fn unset_directories_mean_no_users() {
        let users = ApiKeyUsers::load(&MainSettings::default()).unwrap();
        assert!(users.list().is_empty());
        assert!(users.source().is_none());
    }

    #[test]
    fn non_object_file_is_an_error() {
        let v7 = tempfile::tempdir().unwrap();
        fs::write(v7.path().join(API_KEYS_FILE), "[1, 2]").unwrap();
        let settings = MainSettings {
            pb7dir: v7.path().display().to_string(),
            ..MainSettings::default()
        };
        assert!(matches!(ApiKeyUsers::load(&settings), Err(Error::Json(_))));
    }
}
