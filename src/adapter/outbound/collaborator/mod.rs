//! File-system backed collaborators.
//!
//! Each collaborator reads its state once when constructed. The session
//! rebuilds them after the install directories change.

mod coin_data;
mod factory;
mod instances;
mod services;
mod users;

pub use coin_data::{CoinDataClient, API_KEY_HEADER, KEY_INFO_PATH};
pub use factory::FsCollaboratorFactory;
pub use instances::DirectoryInstances;
pub use services::{PidFileServices, SERVICE_NAMES};
pub use users::{ApiKeyUsers, API_KEYS_FILE};
