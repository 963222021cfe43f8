//! Infrastructure configuration modules.

pub mod coin_data;
pub mod logging;
pub mod navigation;
pub mod settings;

pub use settings::AppConfig;
