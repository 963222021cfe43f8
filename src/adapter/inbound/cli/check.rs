//! Handler for `check`: one reconcile and validation pass.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::{FieldStatuses, SessionContext};
use crate::domain::{Engine, PathField, Readiness};
use crate::error::Result;
use crate::port::inbound::ConsolePort;
use crate::port::outbound::NoProgress;

/// Execute `check`. Returns whether the configuration is ready.
pub fn execute(console: &dyn ConsolePort) -> Result<bool> {
    let mut session = SessionContext::new();
    let statuses = console.bootstrapper().reconcile(&mut session, &NoProgress);
    let readiness = console.validator().evaluate(&mut session);

    if output::is_json() {
        output::json_output(report(&session, &statuses, &readiness));
        return Ok(readiness.is_ready());
    }

    output::section("Configuration Check");
    for engine in Engine::ALL {
        for field in [engine.dir_field(), engine.venv_field()] {
            output::status(
                statuses.get(field).glyph(),
                field.caption(),
                session.cached.path(field),
            );
        }
    }
    output::field("Bot name", &session.cached.pbname);
    output::field("Role", &session.cached.role);

    match readiness.issue() {
        None => output::success("Configuration is ready"),
        Some(issue) => {
            output::error(&issue.to_string());
            output::hint("run `pbgui` to fix the configuration interactively");
        }
    }
    Ok(readiness.is_ready())
}

fn report(
    session: &SessionContext,
    statuses: &FieldStatuses,
    readiness: &Readiness,
) -> serde_json::Value {
    let fields: serde_json::Map<String, serde_json::Value> = PathField::ALL
        .iter()
        .map(|field| {
            (
                field.key().to_string(),
                json!({
                    "value": session.cached.path(*field),
                    "ok": statuses.get(*field).is_ok(),
                }),
            )
        })
        .collect();
    json!({
        "ready": readiness.is_ready(),
        "reason": readiness.issue().map(ToString::to_string),
        "category": readiness.issue().map(|issue| format!("{:?}", issue.category())),
        "fields": fields,
        "pbname": session.cached.pbname,
        "role": session.cached.role,
    })
}
