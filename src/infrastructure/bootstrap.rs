//! Composition root: builds the adapters from [`AppConfig`] and hands out
//! application services that borrow them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::auth::SecretsAuthGate;
use crate::adapter::outbound::collaborator::FsCollaboratorFactory;
use crate::adapter::outbound::navigator::PageNavigator;
use crate::adapter::outbound::secrets::SecretsFile;
use crate::adapter::outbound::settings::TomlSettingsStore;
use crate::application::{ConfigValidator, SessionBootstrapper, WelcomePage};
use crate::error::Result;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::host::host_name;
use crate::port::inbound::ConsolePort;
use crate::port::outbound::{SecretsStore, SettingsStore};

/// Everything a console session needs, wired once per process.
pub struct Console {
    config: AppConfig,
    base_dir: PathBuf,
    host_name: String,
    settings: Arc<TomlSettingsStore>,
    secrets: Arc<SecretsFile>,
    auth: SecretsAuthGate,
    navigator: PageNavigator,
    factory: FsCollaboratorFactory,
}

impl Console {
    /// Wire against the current working directory.
    #[allow(clippy::result_large_err)]
    pub fn build(config: AppConfig) -> Result<Self> {
        let base_dir = std::env::current_dir()?;
        Self::with_base_dir(config, base_dir, host_name())
    }

    /// Wire with an explicit base directory and host name.
    ///
    /// Relative paths in `config` resolve against `base_dir`.
    #[allow(clippy::result_large_err)]
    pub fn with_base_dir(
        config: AppConfig,
        base_dir: impl Into<PathBuf>,
        host_name: impl Into<String>,
    ) -> Result<Self> {
        let base_dir = base_dir.into();
        let settings = Arc::new(TomlSettingsStore::new(base_dir.join(config.settings_path())));
        let secrets = Arc::new(SecretsFile::new(base_dir.join(config.secrets_path())));
        let auth = SecretsAuthGate::new(Arc::clone(&secrets) as Arc<dyn SecretsStore>);
        let navigator = PageNavigator::new(config.navigation.pages.iter().cloned());
        let factory = FsCollaboratorFactory::new(
            base_dir.join(config.data_path()),
            Arc::clone(&settings) as Arc<dyn SettingsStore>,
            config.coin_data.url()?,
            config.coin_data.timeout(),
        );
        debug!(
            settings = %settings.path().display(),
            secrets = %secrets.path().display(),
            "Console wired"
        );

        Ok(Self {
            config,
            base_dir,
            host_name: host_name.into(),
            settings,
            secrets,
            auth,
            navigator,
            factory,
        })
    }
}

impl ConsolePort for Console {
    fn welcome_page(&self) -> WelcomePage<'_> {
        WelcomePage::new(
            self.bootstrapper(),
            self.validator(),
            &self.auth,
            &self.navigator,
            self.config.navigation.dashboard.clone(),
        )
    }

    fn bootstrapper(&self) -> SessionBootstrapper<'_> {
        SessionBootstrapper::new(
            self.settings.as_ref(),
            &self.factory,
            self.host_name.clone(),
            self.base_dir.clone(),
        )
    }

    fn validator(&self) -> ConfigValidator<'_> {
        ConfigValidator::new(self.settings.as_ref(), &self.factory)
    }

    fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }

    fn secrets(&self) -> &dyn SecretsStore {
        self.secrets.as_ref()
    }

    fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_resolve_against_base_dir() {
        let base = tempfile::tempdir().unwrap();
        let console =
            Console::with_base_dir(AppConfig::default(), base.path(), "box").unwrap();

        console.settings().set("main", "pbname", "box").unwrap();

        assert!(base.path().join("pbgui.toml").is_file());
        assert!(!console.secrets().exists());
        assert_eq!(console.base_dir(), base.path());
    }
}
