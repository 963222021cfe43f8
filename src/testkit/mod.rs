//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`collaborators`] - Counting collaborator factory and static registries
//! - [`gate`] - Fixed auth gate and recording navigator
//! - [`install`] - Fake engine installs on disk
//! - [`prompt`] - Scripted answers for interactive CLI flows

pub mod collaborators;
pub mod gate;
pub mod install;
pub mod prompt;
