//! Human-readable identity of this node.

use std::fmt;

use super::error::DomainError;

/// Maximum characters accepted for a node name.
pub const MAX_NODE_NAME_LEN: usize = 32;

/// Validated node name: non-blank, at most [`MAX_NODE_NAME_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName(String);

impl NodeName {
    /// Validate a name typed on the form.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyNodeName);
        }
        let len = raw.chars().count();
        if len > MAX_NODE_NAME_LEN {
            return Err(DomainError::NodeNameTooLong {
                len,
                max: MAX_NODE_NAME_LEN,
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// Default name derived from the host name, cut to the length limit.
    #[must_use]
    pub fn from_host(host: &str) -> Self {
        let name: String = host.chars().take(MAX_NODE_NAME_LEN).collect();
        if name.trim().is_empty() {
            Self("localhost".to_string())
        } else {
            Self(name)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
