//! Configuration domain: engine generations, settings fields and the
//! readiness taxonomy. Nothing here touches a store or a session.

pub mod engine;
pub mod error;
pub mod field;
pub mod node;
pub mod path;
pub mod readiness;
pub mod role;
pub mod settings;

pub use engine::Engine;
pub use field::{ConfigField, PathField};
pub use node::NodeName;
pub use readiness::{ConfigIssue, FieldStatus, IssueCategory, Readiness};
pub use role::Role;
pub use settings::MainSettings;
