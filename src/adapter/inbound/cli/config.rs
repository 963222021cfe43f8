//! Handler for the `config` command group.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::settings::{apply_field_edit, load_main_settings};
use crate::domain::ConfigField;
use crate::error::Result;
use crate::port::inbound::ConsolePort;

/// Execute `config show`.
pub fn execute_show(console: &dyn ConsolePort) -> Result<()> {
    let settings = load_main_settings(console.settings());

    if output::is_json() {
        let values: serde_json::Map<String, serde_json::Value> = ConfigField::ALL
            .iter()
            .map(|field| (field.key().to_string(), json!(settings.get(*field))))
            .collect();
        output::json_output(json!({ "main": values }));
        return Ok(());
    }

    output::section("Settings");
    for field in ConfigField::ALL {
        let value = settings.get(field);
        if value.is_empty() {
            output::field(field.key(), output::muted("(unset)"));
        } else {
            output::field(field.key(), value);
        }
    }
    Ok(())
}

/// Execute `config set`.
pub fn execute_set(console: &dyn ConsolePort, field: ConfigField, value: &str) -> Result<()> {
    apply_field_edit(console.settings(), field, value)?;
    output::success(&format!("Saved {field}"));
    if field.as_path_field().is_some() {
        output::hint("run `pbgui check` to validate the new path");
    }
    Ok(())
}
