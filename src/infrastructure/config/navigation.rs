//! Page navigation configuration.

use serde::Deserialize;

/// Where a ready session is sent, and which pages exist.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationConfig {
    pub dashboard: String,
    pub pages: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            dashboard: "dashboards".into(),
            pages: vec!["dashboards".into()],
        }
    }
}
