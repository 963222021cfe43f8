//! Typed per-session state.
//!
//! One [`SessionContext`] lives for one user session. It replaces ambient
//! global state: the bootstrapper, validator and visit flow all receive it
//! explicitly.

use crate::domain::error::DomainError;
use crate::domain::{ConfigIssue, MainSettings, PathField};

use super::registry::Collaborators;

/// Values edited on the form and not yet reconciled.
///
/// An entry stays after it is reconciled, the way a widget keeps its
/// value; reconcile compares it with the cached setting and only persists
/// real differences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub pbdir: Option<String>,
    pub pbvenv: Option<String>,
    pub pb7dir: Option<String>,
    pub pb7venv: Option<String>,
    /// Requested bot name; rejected when longer than 32 characters.
    pub pbname: Option<String>,
    /// State of the master checkbox.
    pub master: Option<bool>,
}

impl FormInputs {
    #[must_use]
    pub fn path(&self, field: PathField) -> Option<&str> {
        self.path_slot_ref(field).as_deref()
    }

    /// Record a pending edit for `field`.
    pub fn set_path(&mut self, field: PathField, value: impl Into<String>) {
        *self.path_slot(field) = Some(value.into());
    }

    /// Drop the pending edit for `field`.
    pub fn clear_path(&mut self, field: PathField) {
        *self.path_slot(field) = None;
    }

    fn path_slot_ref(&self, field: PathField) -> &Option<String> {
        match field {
            PathField::PbDir => &self.pbdir,
            PathField::PbVenv => &self.pbvenv,
            PathField::Pb7Dir => &self.pb7dir,
            PathField::Pb7Venv => &self.pb7venv,
        }
    }

    fn path_slot(&mut self, field: PathField) -> &mut Option<String> {
        match field {
            PathField::PbDir => &mut self.pbdir,
            PathField::PbVenv => &mut self.pbvenv,
            PathField::Pb7Dir => &mut self.pb7dir,
            PathField::Pb7Venv => &mut self.pb7venv,
        }
    }
}

/// Everything that survives between page visits within one session.
#[derive(Debug, Default)]
pub struct SessionContext {
    /// The user passed the password check.
    pub logged_in: bool,
    /// Set by the first authenticated visit; suppresses later redirects.
    pub just_logged_in: bool,
    /// No password is configured.
    pub password_missing: bool,
    /// Last readiness issue, cleared when the configuration becomes ready.
    pub config_error: Option<ConfigIssue>,
    /// Last rejected form edit.
    pub input_error: Option<DomainError>,
    /// Session copies of the persisted fields.
    pub cached: MainSettings,
    /// The role was loaded from settings; it is loaded once per session.
    pub role_loaded: bool,
    /// Derived from the role on load, then driven by the form.
    pub master: bool,
    /// Edits made on the form since the last reconcile.
    pub inputs: FormInputs,
    /// Long-lived collaborators built for this session.
    pub collaborators: Collaborators,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored readiness reason as shown above the form.
    #[must_use]
    pub fn config_error_message(&self) -> Option<String> {
        self.config_error.as_ref().map(ToString::to_string)
    }

    /// Drop all session state, including collaborators. The next visit
    /// requires a fresh login.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Engine;

    #[test]
    fn path_inputs_are_addressed_per_field() {
        let mut inputs = FormInputs::default();
        inputs.set_path(PathField::Pb7Venv, "/v/bin/python");
        assert_eq!(inputs.path(PathField::Pb7Venv), Some("/v/bin/python"));
        assert_eq!(inputs.path(PathField::PbVenv), None);
        inputs.clear_path(PathField::Pb7Venv);
        assert_eq!(inputs.path(PathField::Pb7Venv), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut session = SessionContext::new();
        session.logged_in = true;
        session.just_logged_in = true;
        session.config_error = Some(ConfigIssue::PathNotConfigured { engine: Engine::V6 });
        session.inputs.pbname = Some("n".into());
        session.clear();
        assert!(!session.logged_in);
        assert!(!session.just_logged_in);
        assert!(session.config_error.is_none());
        assert_eq!(session.inputs, FormInputs::default());
    }

    #[test]
    fn config_error_renders_reason() {
        let mut session = SessionContext::new();
        assert_eq!(session.config_error_message(), None);
        session.config_error = Some(ConfigIssue::NoUsers);
        assert!(session
            .config_error_message()
            .unwrap()
            .starts_with("No users are configured."));
    }
}
