//! Readiness verdicts and the issues that block readiness.

use std::fmt;

use super::engine::Engine;

/// Broad class of a readiness issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    /// A field is unset.
    MissingConfig,
    /// A path is absent, of the wrong kind, or has the wrong name.
    InvalidPath,
    /// The user registry lists nobody.
    MissingUsers,
    /// The coin data API is unconfigured or unreachable.
    DataFeedUnavailable,
}

/// The first reason the console is not ready.
///
/// `Display` renders the sentence shown above the configuration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    PathNotConfigured { engine: Engine },
    PathMissing { engine: Engine, path: String },
    EntryPointMissing { engine: Engine, path: String },
    VenvNotConfigured { engine: Engine },
    VenvNotFile { engine: Engine, path: String },
    VenvNotInterpreter { engine: Engine, path: String },
    NodeNameMissing,
    RoleInvalid,
    NoUsers,
    CoinDataUnavailable,
}

impl ConfigIssue {
    #[must_use]
    pub const fn category(&self) -> IssueCategory {
        match self {
            Self::PathNotConfigured { .. }
            | Self::VenvNotConfigured { .. }
            | Self::NodeNameMissing
            | Self::RoleInvalid => IssueCategory::MissingConfig,
            Self::PathMissing { .. }
            | Self::EntryPointMissing { .. }
            | Self::VenvNotFile { .. }
            | Self::VenvNotInterpreter { .. } => IssueCategory::InvalidPath,
            Self::NoUsers => IssueCategory::MissingUsers,
            Self::CoinDataUnavailable => IssueCategory::DataFeedUnavailable,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotConfigured { engine } => write!(f, "{engine} path is not configured."),
            Self::PathMissing { engine, path } => {
                write!(f, "{engine} path '{path}' does not exist.")
            }
            Self::EntryPointMissing { engine, path } => write!(
                f,
                "{engine} path '{path}' is missing {}.",
                engine.entry_point()
            ),
            Self::VenvNotConfigured { engine } => write!(f, "{engine} venv is not configured."),
            Self::VenvNotFile { engine, path } => {
                write!(f, "{engine} venv '{path}' is not a valid file.")
            }
            Self::VenvNotInterpreter { engine, path } => {
                write!(f, "{engine} venv '{path}' is not a valid Python interpreter.")
            }
            Self::NodeNameMissing => f.write_str("Bot name is not configured or empty."),
            Self::RoleInvalid => f.write_str("Role (master/slave) is not configured or invalid."),
            Self::NoUsers => f.write_str(
                "No users are configured. Please configure at least one user in Setup API-Keys.",
            ),
            Self::CoinDataUnavailable => {
                f.write_str("Coin Data API is not configured. Please configure it in Coin Data.")
            }
        }
    }
}

/// Outcome of a readiness evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotReady(ConfigIssue),
}

impl Readiness {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    #[must_use]
    pub const fn issue(&self) -> Option<&ConfigIssue> {
        match self {
            Self::Ready => None,
            Self::NotReady(issue) => Some(issue),
        }
    }
}

/// OK/FAIL marker rendered beside a path field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Ok,
    Fail,
}

impl FieldStatus {
    #[must_use]
    pub const fn from_ok(ok: bool) -> Self {
        if ok {
            Self::Ok
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Ok => "✅",
            Self::Fail => "❌",
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_match_form_wording() {
        assert_eq!(
            ConfigIssue::PathNotConfigured { engine: Engine::V6 }.to_string(),
            "Passivbot V6 path is not configured."
        );
        assert_eq!(
            ConfigIssue::EntryPointMissing {
                engine: Engine::V7,
                path: "/opt/pb7".into()
            }
            .to_string(),
            "Passivbot V7 path '/opt/pb7' is missing src/passivbot.py."
        );
        assert_eq!(
            ConfigIssue::VenvNotInterpreter {
                engine: Engine::V6,
                path: "/v/bin/pip".into()
            }
            .to_string(),
            "Passivbot V6 venv '/v/bin/pip' is not a valid Python interpreter."
        );
    }

    #[test]
    fn categories_follow_taxonomy() {
        assert_eq!(
            ConfigIssue::VenvNotConfigured { engine: Engine::V7 }.category(),
            IssueCategory::MissingConfig
        );
        assert_eq!(
            ConfigIssue::PathMissing {
                engine: Engine::V6,
                path: "/x".into()
            }
            .category(),
            IssueCategory::InvalidPath
        );
        assert_eq!(ConfigIssue::NoUsers.category(), IssueCategory::MissingUsers);
        assert_eq!(
            ConfigIssue::CoinDataUnavailable.category(),
            IssueCategory::DataFeedUnavailable
        );
    }

    #[test]
    fn glyphs() {
        assert_eq!(FieldStatus::from_ok(true).glyph(), "✅");
        assert_eq!(FieldStatus::from_ok(false).to_string(), "❌");
    }
}
