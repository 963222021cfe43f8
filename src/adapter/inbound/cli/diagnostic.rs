//! Miette diagnostics for configuration errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration file error with the offending span highlighted.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(pbgui::config))]
pub struct ConfigFileError {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigFileError {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Configuration error without a source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(pbgui::config))]
pub struct ConfigValueError {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// Turn a config load failure into a renderable diagnostic.
///
/// Parse errors get the file contents and span; everything else is shown
/// as a plain message with a hint where one helps.
#[must_use]
pub fn config_report(path: &Path, content: Option<&str>, err: &Error) -> miette::Report {
    if let (Error::Config(ConfigError::Parse(parse)), Some(content)) = (err, content) {
        let span = parse.span().unwrap_or(0..0);
        let diagnostic = ConfigFileError::new(
            format!("invalid config {}", path.display()),
            path.display().to_string(),
            content.to_string(),
            span.start,
            span.end.saturating_sub(span.start),
        )
        .with_help(parse.message().to_string());
        return miette::Report::new(diagnostic);
    }

    let help = match err {
        Error::Config(ConfigError::MissingField { field }) => {
            Some(format!("set `{field}` in {}", path.display()))
        }
        Error::Config(ConfigError::InvalidValue { field, .. }) => {
            Some(format!("fix `{field}` in {}", path.display()))
        }
        _ => None,
    };
    miette::Report::new(ConfigValueError {
        message: err.to_string(),
        help,
    })
}
