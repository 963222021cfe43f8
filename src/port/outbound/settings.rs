//! Persisted settings port.

use crate::error::Result;

/// Durable key/value configuration organized by section.
///
/// Implementations use interior mutability so a store can be shared by
/// reference between the bootstrapper, the validator and the collaborators.
pub trait SettingsStore: Send + Sync {
    /// Read one value. `None` when the key was never written.
    fn get(&self, section: &str, key: &str) -> Result<Option<String>>;

    /// Write one value, creating the section if needed.
    fn set(&self, section: &str, key: &str, value: &str) -> Result<()>;
}
