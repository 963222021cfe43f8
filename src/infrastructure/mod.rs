//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring adapters into the application
//! - [`config`] - Configuration loading and validation
//! - [`host`] - Host name lookup

pub mod bootstrap;
pub mod config;
pub mod host;

pub use bootstrap::Console;
pub use config::AppConfig;
