//! Change-password dialog.

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::prompt::{Prompter, TerminalPrompter};
use crate::application::{change_password, PasswordChangeRequest, SessionContext};
use crate::error::Result;
use crate::port::inbound::ConsolePort;
use crate::port::outbound::SecretsStore;

/// Execute `password`. Returns whether the password was changed.
pub fn execute(console: &dyn ConsolePort) -> Result<bool> {
    let mut session = SessionContext::new();
    dialog(console.secrets(), &TerminalPrompter::new(), &mut session)
}

/// Ask for the current and new password and apply the change.
///
/// Rejections are reported and yield `Ok(false)`; only prompt failures
/// are errors.
pub fn dialog(
    secrets: &dyn SecretsStore,
    prompter: &dyn Prompter,
    session: &mut SessionContext,
) -> Result<bool> {
    output::section("Change Password");
    let request = PasswordChangeRequest {
        current: prompter.password("Current Password")?,
        new: prompter.password("New Password")?,
        confirm: prompter.password("Confirm New Password")?,
    };

    match change_password(secrets, &request, session) {
        Ok(changed) => {
            if changed.secrets_created {
                output::warning("Secrets file did not exist and was created.");
            }
            output::success("Password updated successfully. Please log in again.");
            Ok(true)
        }
        Err(e) => {
            output::error(&e.to_string());
            Ok(false)
        }
    }
}
