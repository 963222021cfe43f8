use thiserror::Error;

use crate::domain::error::DomainError;

/// Application configuration errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Persisted settings store errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode settings for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: toml::ser::Error,
    },

    #[error("settings section [{section}] is not a table")]
    SectionNotTable { section: String },
}

/// Secrets file errors.
#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("failed to read secrets {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write secrets {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid TOML file: {source}")]
    Malformed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode secrets for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: toml::ser::Error,
    },
}

/// Password change rejections.
///
/// None of these leave persisted state modified.
#[derive(Error, Debug)]
pub enum PasswordChangeError {
    #[error("Current password is incorrect.")]
    AuthMismatch,

    #[error("New passwords do not match.")]
    ConfirmMismatch,

    #[error("secrets file is not a valid TOML file.")]
    MalformedSecrets(#[source] SecretsError),

    #[error("An error occurred while updating the password: {0}")]
    Update(#[source] SecretsError),
}

/// Page navigation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("page `{target}` is not available")]
    UnknownPage { target: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Secrets(#[from] SecretsError),

    #[error(transparent)]
    Password(#[from] PasswordChangeError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Dialog(String),

    #[error("login failed after {attempts} attempts")]
    LoginFailed { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialog(err.to_string())
    }
}
