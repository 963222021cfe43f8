//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod auth;
pub mod collaborator;
pub mod navigation;
pub mod progress;
pub mod secrets;
pub mod settings;

pub use auth::{AuthGate, AuthStatus};
pub use collaborator::{
    CoinDataStatus, CollaboratorFactory, CollaboratorKind, InstanceRegistry, InstanceScope,
    ServiceRegistry, ServiceStatus, UserDirectory,
};
pub use navigation::Navigator;
pub use progress::{ConstructionProgress, NoProgress};
pub use secrets::{SecretsStore, PASSWORD_KEY};
pub use settings::SettingsStore;
