//! Authentication gate port.

/// Authentication state for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// The session has logged in.
    Authenticated,
    /// No password is set; access is open and a warning is due.
    PasswordMissing,
    /// A login is required before anything else runs.
    Required,
}

impl AuthStatus {
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        !matches!(self, Self::Required)
    }
}

/// Password check in front of the console.
pub trait AuthGate: Send + Sync {
    /// Resolve the status of a session, given whether it already logged in.
    fn status(&self, logged_in: bool) -> AuthStatus;

    /// Check a login attempt.
    fn verify(&self, attempt: &str) -> bool;
}
