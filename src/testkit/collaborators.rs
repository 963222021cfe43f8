//! Collaborator fakes.

use std::collections::HashMap;
use std::io;

use parking_lot::Mutex;

use crate::domain::MainSettings;
use crate::error::{Error, Result};
use crate::port::outbound::{
    CoinDataStatus, CollaboratorFactory, CollaboratorKind, InstanceRegistry, InstanceScope,
    ServiceRegistry, ServiceStatus, UserDirectory,
};

/// Fixed user list.
#[derive(Debug, Clone, Default)]
pub struct StaticUsers(Vec<String>);

impl StaticUsers {
    pub fn new(users: Vec<String>) -> Self {
        Self(users)
    }
}

impl UserDirectory for StaticUsers {
    fn list(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Fixed instance names.
#[derive(Debug, Clone, Default)]
pub struct StaticInstances(Vec<String>);

impl StaticInstances {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl InstanceRegistry for StaticInstances {
    fn names(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Fixed service states.
#[derive(Debug, Clone, Default)]
pub struct StaticServices(Vec<ServiceStatus>);

impl StaticServices {
    pub fn new(statuses: Vec<ServiceStatus>) -> Self {
        Self(statuses)
    }
}

impl ServiceRegistry for StaticServices {
    fn statuses(&self) -> Vec<ServiceStatus> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoinDataMode {
    Available,
    Unavailable,
    Failing,
}

/// Coin data status with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct StaticCoinData(CoinDataMode);

impl StaticCoinData {
    pub fn available() -> Self {
        Self(CoinDataMode::Available)
    }

    pub fn unavailable() -> Self {
        Self(CoinDataMode::Unavailable)
    }

    /// Answers with an error, as an unreachable API would.
    pub fn failing() -> Self {
        Self(CoinDataMode::Failing)
    }
}

impl CoinDataStatus for StaticCoinData {
    fn fetch_api_status(&self) -> Result<bool> {
        match self.0 {
            CoinDataMode::Available => Ok(true),
            CoinDataMode::Unavailable => Ok(false),
            CoinDataMode::Failing => Err(Error::Io(io::Error::other("coin data API unreachable"))),
        }
    }
}

/// Factory that counts construction attempts per collaborator.
///
/// Failed attempts count too. Users come from a shared list that tests can
/// swap between builds.
pub struct CountingFactory {
    users: Mutex<Vec<String>>,
    instances: Vec<String>,
    coin_data: StaticCoinData,
    failing: Vec<CollaboratorKind>,
    builds: Mutex<HashMap<CollaboratorKind, usize>>,
    coin_checks: Mutex<usize>,
    seen_settings: Mutex<Vec<MainSettings>>,
}

impl CountingFactory {
    pub fn new(users: Vec<String>) -> Self {
        Self {
            users: Mutex::new(users),
            instances: Vec::new(),
            coin_data: StaticCoinData::available(),
            failing: Vec::new(),
            builds: Mutex::new(HashMap::new()),
            coin_checks: Mutex::new(0),
            seen_settings: Mutex::new(Vec::new()),
        }
    }

    /// Every build of `kind` fails.
    #[must_use]
    pub fn failing(mut self, kind: CollaboratorKind) -> Self {
        self.failing.push(kind);
        self
    }

    #[must_use]
    pub fn with_coin_data(mut self, coin_data: StaticCoinData) -> Self {
        self.coin_data = coin_data;
        self
    }

    /// Names reported by every instance registry.
    #[must_use]
    pub fn with_instances(mut self, names: Vec<String>) -> Self {
        self.instances = names;
        self
    }

    /// Users handed to registries built from now on.
    pub fn set_users(&self, users: Vec<String>) {
        *self.users.lock() = users;
    }

    pub fn builds(&self, kind: CollaboratorKind) -> usize {
        self.builds.lock().get(&kind).copied().unwrap_or(0)
    }

    pub fn total_builds(&self) -> usize {
        self.builds.lock().values().sum()
    }

    /// Number of coin data checkers handed out.
    pub fn coin_checks(&self) -> usize {
        *self.coin_checks.lock()
    }

    /// Settings passed to the most recent user registry build.
    pub fn last_user_settings(&self) -> Option<MainSettings> {
        self.seen_settings.lock().last().cloned()
    }

    fn attempt(&self, kind: CollaboratorKind) -> Result<()> {
        *self.builds.lock().entry(kind).or_insert(0) += 1;
        if self.failing.contains(&kind) {
            return Err(Error::Io(io::Error::other(format!("{kind} unavailable"))));
        }
        Ok(())
    }
}

impl CollaboratorFactory for CountingFactory {
    fn users(&self, settings: &MainSettings) -> Result<Box<dyn UserDirectory>> {
        self.attempt(CollaboratorKind::Users)?;
        self.seen_settings.lock().push(settings.clone());
        Ok(Box::new(StaticUsers::new(self.users.lock().clone())))
    }

    fn instances(
        &self,
        scope: InstanceScope,
        _settings: &MainSettings,
    ) -> Result<Box<dyn InstanceRegistry>> {
        let kind = match scope {
            InstanceScope::Single => CollaboratorKind::Instances,
            InstanceScope::Multi => CollaboratorKind::MultiInstances,
            InstanceScope::V7 => CollaboratorKind::V7Instances,
        };
        self.attempt(kind)?;
        Ok(Box::new(StaticInstances::new(self.instances.clone())))
    }

    fn services(&self) -> Result<Box<dyn ServiceRegistry>> {
        self.attempt(CollaboratorKind::Services)?;
        Ok(Box::new(StaticServices::new(vec![ServiceStatus {
            name: "PBRun".into(),
            running: true,
        }])))
    }

    fn coin_data(&self) -> Box<dyn CoinDataStatus> {
        *self.coin_checks.lock() += 1;
        Box::new(self.coin_data)
    }
}
