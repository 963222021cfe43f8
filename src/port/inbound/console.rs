//! Console capability surface for inbound adapters.

use std::path::Path;

use crate::application::{ConfigValidator, SessionBootstrapper, WelcomePage};
use crate::port::outbound::{SecretsStore, SettingsStore};

/// What a front end needs to drive the entry page.
///
/// Implemented by the composition root; front ends never build adapters
/// themselves.
pub trait ConsolePort {
    /// The visit flow, wired to the configured adapters.
    fn welcome_page(&self) -> WelcomePage<'_>;

    fn bootstrapper(&self) -> SessionBootstrapper<'_>;

    fn validator(&self) -> ConfigValidator<'_>;

    fn settings(&self) -> &dyn SettingsStore;

    fn secrets(&self) -> &dyn SecretsStore;

    /// Directory relative paths are resolved against.
    fn base_dir(&self) -> &Path;
}
