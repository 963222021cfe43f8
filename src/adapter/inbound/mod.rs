//! Inbound (driving) adapters.

pub mod cli;
