//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`console`]: The entry page services a front end drives

pub mod console;

pub use console::ConsolePort;
