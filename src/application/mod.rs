//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters to run
//! one visit of the entry page: reconcile, validate, then navigate or
//! render the form.

pub mod bootstrap;
pub mod password;
pub mod registry;
pub mod session;
pub mod settings;
pub mod validator;
pub mod welcome;

pub use bootstrap::{FieldStatuses, SessionBootstrapper};
pub use password::{change_password, PasswordChangeRequest, PasswordChanged};
pub use registry::Collaborators;
pub use session::{FormInputs, SessionContext};
pub use validator::{ConfigValidator, ValidationRule, RULES};
pub use welcome::{VisitOutcome, VisitState, WelcomeForm, WelcomePage, PASSWORD_MISSING_NOTICE};
