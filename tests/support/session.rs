use pbgui::adapter::outbound::settings::MemorySettingsStore;
use pbgui::application::{ConfigValidator, SessionBootstrapper};
use pbgui::testkit::collaborators::CountingFactory;
use pbgui::testkit::install::FakeInstall;
use tempfile::TempDir;

pub const HOST: &str = "trader-box";
pub const BASE_DIR: &str = "/srv/pbgui";

/// A configured install, a store pointing at it and a factory with users.
pub struct Fixture {
    pub dir: TempDir,
    pub install: FakeInstall,
    pub store: MemorySettingsStore,
    pub factory: CountingFactory,
}

impl Fixture {
    pub fn ready() -> Self {
        let fixture = Self::unconfigured(CountingFactory::new(vec!["binance_01".into()]));
        fixture.install.configure(&fixture.store).expect("configure store");
        fixture
    }

    pub fn unconfigured(factory: CountingFactory) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let install = FakeInstall::create(dir.path()).expect("fake install");
        Self {
            dir,
            install,
            store: MemorySettingsStore::new(),
            factory,
        }
    }

    pub fn bootstrapper(&self) -> SessionBootstrapper<'_> {
        SessionBootstrapper::new(&self.store, &self.factory, HOST, BASE_DIR)
    }

    pub fn validator(&self) -> ConfigValidator<'_> {
        ConfigValidator::new(&self.store, &self.factory)
    }
}
