//! Domain collaborator ports.
//!
//! The collaborators are long-lived objects that are expensive to build.
//! The session owns at most one of each; see
//! [`Collaborators`](crate::application::registry::Collaborators).

use std::fmt;

use crate::domain::MainSettings;
use crate::error::Result;

/// Registry of configured exchange users.
pub trait UserDirectory: Send + Sync {
    /// Names of the configured users.
    fn list(&self) -> Vec<String>;
}

/// Registry of bot instances for one engine generation or mode.
pub trait InstanceRegistry: Send + Sync {
    fn names(&self) -> Vec<String>;

    fn len(&self) -> usize {
        self.names().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run state of one background service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub name: String,
    pub running: bool,
}

/// Registry of background services.
pub trait ServiceRegistry: Send + Sync {
    fn statuses(&self) -> Vec<ServiceStatus>;
}

/// Coin market data feed.
pub trait CoinDataStatus: Send + Sync {
    /// Whether the external data API is configured and answering.
    ///
    /// May block on network I/O. Errors mean "not available".
    fn fetch_api_status(&self) -> Result<bool>;
}

/// Which instance registry to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceScope {
    /// Single V6 instances.
    Single,
    /// V6 multi-symbol instances.
    Multi,
    /// V7 instances.
    V7,
}

/// The five collaborators a session holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollaboratorKind {
    Users,
    Instances,
    MultiInstances,
    V7Instances,
    Services,
}

impl CollaboratorKind {
    /// Construction order.
    pub const ALL: [CollaboratorKind; 5] = [
        CollaboratorKind::Users,
        CollaboratorKind::Instances,
        CollaboratorKind::MultiInstances,
        CollaboratorKind::V7Instances,
        CollaboratorKind::Services,
    ];

    /// Collaborators that cache paths derived from the install directories.
    pub const PATH_DEPENDENT: [CollaboratorKind; 4] = [
        CollaboratorKind::Users,
        CollaboratorKind::Instances,
        CollaboratorKind::MultiInstances,
        CollaboratorKind::V7Instances,
    ];

    #[must_use]
    pub const fn instance_scope(self) -> Option<InstanceScope> {
        match self {
            Self::Instances => Some(InstanceScope::Single),
            Self::MultiInstances => Some(InstanceScope::Multi),
            Self::V7Instances => Some(InstanceScope::V7),
            Self::Users | Self::Services => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Instances => "Instances",
            Self::MultiInstances => "Multi Instances",
            Self::V7Instances => "v7 Instances",
            Self::Services => "Services",
        }
    }
}

impl fmt::Display for CollaboratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builds collaborators on demand.
///
/// Each call constructs a fresh object; caching is the session's job.
pub trait CollaboratorFactory: Send + Sync {
    fn users(&self, settings: &MainSettings) -> Result<Box<dyn UserDirectory>>;

    fn instances(
        &self,
        scope: InstanceScope,
        settings: &MainSettings,
    ) -> Result<Box<dyn InstanceRegistry>>;

    fn services(&self) -> Result<Box<dyn ServiceRegistry>>;

    /// Coin data status checker. Built per evaluation; never cached.
    fn coin_data(&self) -> Box<dyn CoinDataStatus>;
}
