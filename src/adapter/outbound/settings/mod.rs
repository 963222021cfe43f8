//! Settings store adapters.

mod file;
mod memory;

pub use file::TomlSettingsStore;
pub use memory::MemorySettingsStore;
