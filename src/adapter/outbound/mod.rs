//! Outbound adapters.

pub mod auth;
pub mod collaborator;
pub mod navigator;
pub mod secrets;
pub mod settings;
