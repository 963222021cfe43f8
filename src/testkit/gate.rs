//! Auth gate and navigator fakes.

use parking_lot::Mutex;

use crate::error::NavigationError;
use crate::port::outbound::{AuthGate, AuthStatus, Navigator};

/// Auth gate with a fixed password, or none.
#[derive(Debug, Clone)]
pub struct FixedAuthGate {
    password: Option<String>,
}

impl FixedAuthGate {
    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
        }
    }

    /// No password configured: every session is let in.
    pub fn open() -> Self {
        Self { password: None }
    }
}

impl AuthGate for FixedAuthGate {
    fn status(&self, logged_in: bool) -> AuthStatus {
        match (&self.password, logged_in) {
            (None, _) => AuthStatus::PasswordMissing,
            (Some(_), true) => AuthStatus::Authenticated,
            (Some(_), false) => AuthStatus::Required,
        }
    }

    fn verify(&self, attempt: &str) -> bool {
        self.password.as_deref() == Some(attempt)
    }
}

/// Records every switch; optionally refuses all of them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    refuse: bool,
    switches: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every switch fails with `UnknownPage`.
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            switches: Mutex::new(Vec::new()),
        }
    }

    /// Targets of all attempted switches, including refused ones.
    pub fn switches(&self) -> Vec<String> {
        self.switches.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn switch_page(&self, target: &str) -> Result<(), NavigationError> {
        self.switches.lock().push(target.to_string());
        if self.refuse {
            return Err(NavigationError::UnknownPage {
                target: target.to_string(),
            });
        }
        Ok(())
    }
}
