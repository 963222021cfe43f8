//! Coin market data API status check.
//!
//! Reads the API key from the settings store on every check and asks the
//! key info endpoint whether the key is accepted.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};
use url::Url;

use crate::domain::field::{COIN_DATA_API_KEY, COIN_DATA_SECTION};
use crate::error::{ConfigError, Result};
use crate::port::outbound::{CoinDataStatus, SettingsStore};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Endpoint that reports on the key itself.
pub const KEY_INFO_PATH: &str = "v1/key/info";

pub struct CoinDataClient {
    store: Arc<dyn SettingsStore>,
    api_url: Url,
    timeout: Duration,
}

impl CoinDataClient {
    pub fn new(store: Arc<dyn SettingsStore>, api_url: Url, timeout: Duration) -> Self {
        Self {
            store,
            api_url,
            timeout,
        }
    }

    /// Full key info URL, tolerating a base URL with or without a
    /// trailing slash.
    pub fn key_info_url(&self) -> Result<Url> {
        let mut base = self.api_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let url = base.join(KEY_INFO_PATH).map_err(|e| ConfigError::InvalidValue {
            field: "coin_data.api_url",
            reason: e.to_string(),
        })?;
        Ok(url)
    }

    fn api_key(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(COIN_DATA_SECTION, COIN_DATA_API_KEY)?
            .filter(|key| !key.trim().is_empty()))
    }
}

impl CoinDataStatus for CoinDataClient {
    fn fetch_api_status(&self) -> Result<bool> {
        let Some(api_key) = self.api_key()? else {
            debug!("Coin data API key not configured");
            return Ok(false);
        };

        let url = self.key_info_url()?;
        let client = Client::builder().timeout(self.timeout).build()?;
        let response = client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Coin data API rejected key");
        }
        Ok(status.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::settings::MemorySettingsStore;

    fn client(store: Arc<MemorySettingsStore>, url: &str) -> CoinDataClient {
        CoinDataClient::new(store, Url::parse(url).unwrap(), Duration::from_secs(1))
    }

    #[test]
    fn key_info_url_joins_with_or_without_slash() {
        let store = Arc::new(MemorySettingsStore::new());
        assert_eq!(
            client(store.clone(), "https://pro-api.coinmarketcap.com")
                .key_info_url()
                .unwrap()
                .as_str(),
            "https://pro-api.coinmarketcap.com/v1/key/info"
        );
        assert_eq!(
            client(store, "http://localhost:9000/cmc/")
                .key_info_url()
                .unwrap()
                .as_str(),
            "http://localhost:9000/cmc/v1/key/info"
        );
    }

    #[test]
    fn blank_key_is_unavailable_without_a_request() {
        let store = Arc::new(MemorySettingsStore::new());
        store.set(COIN_DATA_SECTION, COIN_DATA_API_KEY, "  ").unwrap();
        // Port 9 would refuse the connection; an early `false` proves no request went out.
        let client = client(store, "http://127.0.0.1:9");
        assert!(!client.fetch_api_status().unwrap());
    }

    #[test]
    fn unreachable_api_is_an_error() {
        let store = Arc::new(MemorySettingsStore::new());
        store.set(COIN_DATA_SECTION, COIN_DATA_API_KEY, "abc").unwrap();
        let client = client(store, "http://127.0.0.1:9");
        assert!(client.fetch_api_status().is_err());
    }
}
