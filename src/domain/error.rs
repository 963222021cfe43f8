//! Domain validation errors for configuration values.
//!
//! Returned by `parse` constructors when a value the user typed violates a
//! field rule. These are input errors, not readiness issues: readiness is
//! reported through [`ConfigIssue`](super::readiness::ConfigIssue).
//!
//! # Examples
//!
//! ```
//! use pbgui::domain::error::DomainError;
//! use pbgui::domain::NodeName;
//!
//! let result = NodeName::parse(&"x".repeat(40));
//! assert!(matches!(result, Err(DomainError::NodeNameTooLong { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when a configuration value breaks a field rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Node names are limited in length.
    #[error("bot name must be at most {max} characters, got {len}")]
    NodeNameTooLong {
        /// Characters supplied.
        len: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// Node names cannot be blank.
    #[error("bot name cannot be empty")]
    EmptyNodeName,

    /// Role must be one of the recognized values.
    #[error("unknown role `{0}` (expected master or slave)")]
    UnknownRole(String),

    /// A field name that does not map to a known setting.
    #[error("unknown field `{0}`")]
    UnknownField(String),
}
