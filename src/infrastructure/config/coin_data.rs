//! Coin market data API configuration.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

pub const DEFAULT_API_URL: &str = "https://pro-api.coinmarketcap.com";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CoinDataConfig {
    /// Base URL of the data API.
    pub api_url: String,
    /// Request timeout for the status check.
    pub timeout_secs: u64,
}

impl CoinDataConfig {
    #[allow(clippy::result_large_err)]
    pub fn url(&self) -> Result<Url> {
        Url::parse(&self.api_url).map_err(|e| {
            ConfigError::InvalidValue {
                field: "coin_data.api_url",
                reason: e.to_string(),
            }
            .into()
        })
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CoinDataConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            timeout_secs: 10,
        }
    }
}
