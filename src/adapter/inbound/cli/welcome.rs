//! Interactive entry page.
//!
//! Each loop iteration is one page visit. The form is printed, then the
//! user picks an action; edits land in the session's pending inputs and
//! are applied by the next visit.

use std::cell::RefCell;

use crate::adapter::inbound::cli::prompt::{Prompter, TerminalPrompter};
use crate::adapter::inbound::cli::{output, password, picker};
use crate::application::{
    SessionContext, VisitOutcome, WelcomeForm, WelcomePage, PASSWORD_MISSING_NOTICE,
};
use crate::domain::{ConfigField, Engine, PathField};
use crate::error::{ConfigError, Error, Result};
use crate::port::inbound::ConsolePort;
use crate::port::outbound::{CollaboratorKind, ConstructionProgress, InstanceScope};

/// Failed password attempts before the console gives up.
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Edit,
    Browse,
    ToggleMaster,
    ChangePassword,
    Refresh,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Edit,
        Action::Browse,
        Action::ToggleMaster,
        Action::ChangePassword,
        Action::Refresh,
        Action::Quit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit a setting",
            Self::Browse => "Browse for a path",
            Self::ToggleMaster => "Toggle master role",
            Self::ChangePassword => "Change Password",
            Self::Refresh => "Refresh",
            Self::Quit => "Quit",
        }
    }
}

/// Fields editable as free text. The role is driven by the master toggle.
const EDITABLE: [ConfigField; 5] = [
    ConfigField::PbDir,
    ConfigField::PbVenv,
    ConfigField::Pb7Dir,
    ConfigField::Pb7Venv,
    ConfigField::PbName,
];

fn field_label(field: ConfigField) -> &'static str {
    match field.as_path_field() {
        Some(path) => path.caption(),
        None if field == ConfigField::PbName => "Bot Name",
        None => "Role",
    }
}

/// Spinner per collaborator while it is being built.
#[derive(Default)]
pub struct SpinnerProgress {
    current: RefCell<Option<indicatif::ProgressBar>>,
}

impl ConstructionProgress for SpinnerProgress {
    fn started(&self, kind: CollaboratorKind) {
        let pb = output::spinner(&format!("Initializing {kind}..."));
        if let Some(previous) = self.current.replace(Some(pb)) {
            previous.finish_and_clear();
        }
    }

    fn finished(&self, kind: CollaboratorKind, ok: bool) {
        let Some(pb) = self.current.take() else {
            return;
        };
        if ok {
            output::spinner_success(&pb, &format!("{kind} ready"));
        } else {
            output::spinner_fail(&pb, &format!("Failed to initialize {kind}"));
        }
    }
}

/// Execute `welcome`.
pub fn execute(console: &dyn ConsolePort) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`pbgui welcome` is interactive; use `pbgui check --json` for scripted checks"
                .to_string(),
        }
        .into());
    }
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Welcome to Passivbot GUI");
    run(console, &TerminalPrompter::new(), &SpinnerProgress::default())
}

/// Drive page visits until the user quits.
pub fn run(
    console: &dyn ConsolePort,
    prompter: &dyn Prompter,
    progress: &dyn ConstructionProgress,
) -> Result<()> {
    let page = console.welcome_page();
    let mut session = SessionContext::new();
    let mut failed_logins = 0;

    loop {
        match page.visit(&mut session, progress) {
            VisitOutcome::LoginRequired => {
                let attempt = prompter.password("Password")?;
                if page.login(&mut session, &attempt) {
                    failed_logins = 0;
                    continue;
                }
                failed_logins += 1;
                output::error("Password incorrect");
                if failed_logins >= MAX_LOGIN_ATTEMPTS {
                    return Err(Error::LoginFailed {
                        attempts: failed_logins,
                    });
                }
            }
            VisitOutcome::Navigated { target } => {
                render_dashboard(&target, &session);
                let items = vec![
                    "Back to configuration".to_string(),
                    Action::Quit.label().to_string(),
                ];
                if prompter.select("Next", &items, 1)? == 1 {
                    return Ok(());
                }
            }
            VisitOutcome::FormRendered(form) => {
                render_form(&form);
                let items: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
                let action = Action::ALL[prompter.select("Action", &items, 0)?];
                match action {
                    Action::Edit => edit(prompter, &mut session)?,
                    Action::Browse => browse(console, prompter, &page, &mut session)?,
                    Action::ToggleMaster => session.inputs.master = Some(!session.master),
                    Action::ChangePassword => {
                        password::dialog(console.secrets(), prompter, &mut session)?;
                    }
                    Action::Refresh => {}
                    Action::Quit => return Ok(()),
                }
            }
        }
    }
}

fn edit(prompter: &dyn Prompter, session: &mut SessionContext) -> Result<()> {
    let items: Vec<String> = EDITABLE.iter().map(|f| field_label(*f).to_string()).collect();
    let field = EDITABLE[prompter.select("Setting", &items, 0)?];
    let value = prompter.input(field_label(field), session.cached.get(field))?;
    match field.as_path_field() {
        Some(path) => session.inputs.set_path(path, value),
        None => session.inputs.pbname = Some(value),
    }
    Ok(())
}

fn browse(
    console: &dyn ConsolePort,
    prompter: &dyn Prompter,
    page: &WelcomePage<'_>,
    session: &mut SessionContext,
) -> Result<()> {
    let items: Vec<String> = PathField::ALL.iter().map(|f| f.caption().to_string()).collect();
    let field = PathField::ALL[prompter.select("Path", &items, 0)?];
    let current = session.cached.path(field).to_string();
    if let Some(path) = picker::pick(prompter, field, &current, console.base_dir())? {
        let value = path.display().to_string();
        page.bootstrapper().pick_path(session, field, &value);
        output::success(&format!("{} set to {value}", field.caption()));
    }
    Ok(())
}

/// Print the configuration form.
pub fn render_form(form: &WelcomeForm) {
    if form.password_missing {
        output::warning(PASSWORD_MISSING_NOTICE);
    }
    if let Some(notice) = &form.navigation_error {
        output::error(notice);
    }
    if let Some(reason) = &form.config_error {
        output::error(reason);
    }
    if let Some(rejected) = &form.input_error {
        output::error(rejected);
    }

    for engine in Engine::ALL {
        output::section(engine.label());
        for field in [engine.dir_field(), engine.venv_field()] {
            let value = form.settings.path(field);
            if value.is_empty() {
                output::status(form.statuses.get(field).glyph(), field.caption(), output::muted("(unset)"));
            } else {
                output::status(form.statuses.get(field).glyph(), field.caption(), value);
            }
        }
    }

    output::section("Identity");
    output::field("Bot Name", &form.settings.pbname);
    output::field("Master", if form.master { "yes" } else { "no" });

    if form.readiness.is_ready() {
        output::success("Configuration is ready");
    }
}

/// Print the dashboard summary from the session's collaborators.
pub fn render_dashboard(target: &str, session: &SessionContext) {
    output::section(&format!("Dashboard ({target})"));

    match session.collaborators.users() {
        Some(users) => {
            let names = users.list();
            if names.is_empty() {
                output::field("Users", output::muted("(none)"));
            } else {
                output::field("Users", names.join(", "));
            }
        }
        None => output::field("Users", output::muted("(unavailable)")),
    }

    for (label, scope) in [
        (CollaboratorKind::Instances.label(), InstanceScope::Single),
        (CollaboratorKind::MultiInstances.label(), InstanceScope::Multi),
        (CollaboratorKind::V7Instances.label(), InstanceScope::V7),
    ] {
        match session.collaborators.instances(scope) {
            Some(registry) => output::field(label, registry.len()),
            None => output::field(label, output::muted("(unavailable)")),
        }
    }

    if let Some(services) = session.collaborators.services() {
        output::section("Services");
        for status in services.statuses() {
            let state = if status.running { "running" } else { "stopped" };
            output::field(&status.name, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editable_fields_exclude_role() {
        assert!(!EDITABLE.contains(&ConfigField::Role));
        assert_eq!(field_label(ConfigField::PbName), "Bot Name");
        assert_eq!(field_label(ConfigField::Pb7Dir), "Passivbot V7 path");
    }

    #[test]
    fn action_labels_are_unique() {
        let labels: Vec<_> = Action::ALL.iter().map(|a| a.label()).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].iter().any(|other| other.contains(label)));
        }
    }

    #[test]
    fn spinner_progress_tolerates_unmatched_finish() {
        let progress = SpinnerProgress::default();
        progress.finished(CollaboratorKind::Users, true);
        progress.started(CollaboratorKind::Users);
        progress.started(CollaboratorKind::Services);
        progress.finished(CollaboratorKind::Services, false);
    }
}
