//! Entry page visit flow.
//!
//! Each visit resolves authentication, reconciles the session, evaluates
//! readiness and ends either navigated away or with a form to render.
//!
//! ```text
//! UNAUTHENTICATED ──login──▶ JUST_AUTHENTICATED ──(marker set)──▶ SETTLED
//!        ▲                          │ ready: try dashboard              │ always form
//!        └──────── logout / session cleared ◀───────────────────────────┘
//! ```

use tracing::{info, warn};

use crate::application::bootstrap::{FieldStatuses, SessionBootstrapper};
use crate::application::session::SessionContext;
use crate::application::validator::ConfigValidator;
use crate::domain::{MainSettings, Readiness};
use crate::port::outbound::{AuthGate, AuthStatus, ConstructionProgress, Navigator};

/// Banner shown while no password is configured.
pub const PASSWORD_MISSING_NOTICE: &str =
    "You are using PBGUI without a password! Please set a password using \"Change Password\" below.";

/// Where a visit stands before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unauthenticated,
    JustAuthenticated,
    Settled,
}

/// What the presentation layer renders for the configuration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeForm {
    /// OK/FAIL marker per path field.
    pub statuses: FieldStatuses,
    /// Values shown in the form inputs.
    pub settings: MainSettings,
    /// State of the master checkbox.
    pub master: bool,
    pub readiness: Readiness,
    /// First readiness reason, shown above the form.
    pub config_error: Option<String>,
    /// Notice when the dashboard redirect failed.
    pub navigation_error: Option<String>,
    /// Rejected edit, such as an overlong bot name.
    pub input_error: Option<String>,
    /// No password is set; the form shows a warning banner.
    pub password_missing: bool,
}

/// How a visit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    /// The user must log in first.
    LoginRequired,
    /// The user was sent to another page.
    Navigated { target: String },
    /// The configuration form should be shown.
    FormRendered(Box<WelcomeForm>),
}

/// The entry page: one call to [`WelcomePage::visit`] per page view.
///
/// A session is redirected to the dashboard at most once, on the first
/// visit after logging in and only when the configuration is ready.
pub struct WelcomePage<'a> {
    bootstrapper: SessionBootstrapper<'a>,
    validator: ConfigValidator<'a>,
    auth: &'a dyn AuthGate,
    navigator: &'a dyn Navigator,
    dashboard: String,
}

impl<'a> WelcomePage<'a> {
    /// `dashboard` is the page name passed to the navigator on a ready
    /// first visit.
    pub fn new(
        bootstrapper: SessionBootstrapper<'a>,
        validator: ConfigValidator<'a>,
        auth: &'a dyn AuthGate,
        navigator: &'a dyn Navigator,
        dashboard: impl Into<String>,
    ) -> Self {
        Self {
            bootstrapper,
            validator,
            auth,
            navigator,
            dashboard: dashboard.into(),
        }
    }

    #[must_use]
    pub fn bootstrapper(&self) -> &SessionBootstrapper<'a> {
        &self.bootstrapper
    }

    /// Try a password. On success the session counts as logged in.
    pub fn login(&self, session: &mut SessionContext, attempt: &str) -> bool {
        let ok = self.auth.verify(attempt);
        if ok {
            info!("Login succeeded");
            session.logged_in = true;
        } else {
            warn!("Login failed");
        }
        ok
    }

    /// Where the session stands in the visit flow.
    #[must_use]
    pub fn state(&self, session: &SessionContext) -> VisitState {
        if !self.auth.status(session.logged_in).is_authenticated() {
            VisitState::Unauthenticated
        } else if session.just_logged_in {
            VisitState::Settled
        } else {
            VisitState::JustAuthenticated
        }
    }

    /// Handle one page view.
    ///
    /// Unauthenticated sessions get [`VisitOutcome::LoginRequired`] and
    /// nothing else runs. Otherwise the session is reconciled and
    /// evaluated, then redirected or given the form.
    pub fn visit(
        &self,
        session: &mut SessionContext,
        progress: &dyn ConstructionProgress,
    ) -> VisitOutcome {
        match self.auth.status(session.logged_in) {
            AuthStatus::Required => {
                // A later login starts clean.
                session.just_logged_in = false;
                session.config_error = None;
                return VisitOutcome::LoginRequired;
            }
            AuthStatus::PasswordMissing => {
                session.password_missing = true;
                session.logged_in = true;
            }
            AuthStatus::Authenticated => {}
        }

        if session.just_logged_in {
            let (statuses, readiness) = self.check(session, progress);
            return VisitOutcome::FormRendered(Box::new(self.form(session, statuses, readiness, None)));
        }

        session.just_logged_in = true;
        let (statuses, readiness) = self.check(session, progress);
        if !readiness.is_ready() {
            return VisitOutcome::FormRendered(Box::new(self.form(session, statuses, readiness, None)));
        }

        match self.navigator.switch_page(&self.dashboard) {
            Ok(()) => {
                info!(page = %self.dashboard, "Configuration ready, redirecting");
                VisitOutcome::Navigated {
                    target: self.dashboard.clone(),
                }
            }
            Err(e) => {
                warn!(page = %self.dashboard, error = %e, "Redirect failed");
                let notice = format!(
                    "Cannot redirect to Dashboards: {e}. Please navigate to Dashboards manually."
                );
                VisitOutcome::FormRendered(Box::new(self.form(
                    session,
                    statuses,
                    readiness,
                    Some(notice),
                )))
            }
        }
    }

    fn check(
        &self,
        session: &mut SessionContext,
        progress: &dyn ConstructionProgress,
    ) -> (FieldStatuses, Readiness) {
        let statuses = self.bootstrapper.reconcile(session, progress);
        let readiness = self.validator.evaluate(session);
        (statuses, readiness)
    }

    fn form(
        &self,
        session: &SessionContext,
        statuses: FieldStatuses,
        readiness: Readiness,
        navigation_error: Option<String>,
    ) -> WelcomeForm {
        WelcomeForm {
            statuses,
            settings: session.cached.clone(),
            master: session.master,
            readiness,
            config_error: session.config_error_message(),
            navigation_error,
            input_error: session.input_error.as_ref().map(ToString::to_string),
            password_missing: session.password_missing,
        }
    }
}
