//! Production collaborator factory.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use url::Url;

use super::{ApiKeyUsers, CoinDataClient, DirectoryInstances, PidFileServices};
use crate::domain::MainSettings;
use crate::error::Result;
use crate::port::outbound::{
    CoinDataStatus, CollaboratorFactory, InstanceRegistry, InstanceScope, ServiceRegistry,
    SettingsStore, UserDirectory,
};

pub struct FsCollaboratorFactory {
    data_dir: PathBuf,
    store: Arc<dyn SettingsStore>,
    coin_data_url: Url,
    coin_data_timeout: Duration,
}

impl FsCollaboratorFactory {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        store: Arc<dyn SettingsStore>,
        coin_data_url: Url,
        coin_data_timeout: Duration,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            store,
            coin_data_url,
            coin_data_timeout,
        }
    }
}

impl CollaboratorFactory for FsCollaboratorFactory {
    fn users(&self, settings: &MainSettings) -> Result<Box<dyn UserDirectory>> {
        Ok(Box::new(ApiKeyUsers::load(settings)?))
    }

    fn instances(
        &self,
        scope: InstanceScope,
        _settings: &MainSettings,
    ) -> Result<Box<dyn InstanceRegistry>> {
        Ok(Box::new(DirectoryInstances::scan(&self.data_dir, scope)?))
    }

    fn services(&self) -> Result<Box<dyn ServiceRegistry>> {
        debug!(data_dir = %self.data_dir.display(), "Building service registry");
        Ok(Box::new(PidFileServices::new(&self.data_dir)))
    }

    fn coin_data(&self) -> Box<dyn CoinDataStatus> {
        Box::new(CoinDataClient::new(
            Arc::clone(&self.store),
            self.coin_data_url.clone(),
            self.coin_data_timeout,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::settings::MemorySettingsStore;

    #[test]
    fn builds_from_data_dir() {
        let data = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(data.path().join("instances/bybit_01")).unwrap();
        let factory = FsCollaboratorFactory::new(
            data.path(),
            Arc::new(MemorySettingsStore::new()),
            Url::parse("http://127.0.0.1:9").unwrap(),
            Duration::from_secs(1),
        );
        let settings = MainSettings::default();

        let single = factory.instances(InstanceScope::Single, &settings).unwrap();
        let v7 = factory.instances(InstanceScope::V7, &settings).unwrap();

        assert_eq!(single.names(), vec!["bybit_01"]);
        assert!(v7.is_empty());
        assert!(factory.users(&settings).unwrap().list().is_empty());
        assert_eq!(factory.services().unwrap().statuses().len(), 6);
    }
}
