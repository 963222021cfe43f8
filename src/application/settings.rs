//! Typed access to the persisted `main` settings.

use tracing::{info, warn};

use crate::domain::{ConfigField, MainSettings, NodeName, Role};
use crate::error::Result;
use crate::port::outbound::SettingsStore;

/// Read one field. Store failures are logged and read as unset.
#[must_use]
pub fn load_field(store: &dyn SettingsStore, field: ConfigField) -> String {
    match store.get(field.section(), field.key()) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!(field = %field, error = %e, "Failed to read setting");
            String::new()
        }
    }
}

/// Read the whole `main` section into a typed record.
#[must_use]
pub fn load_main_settings(store: &dyn SettingsStore) -> MainSettings {
    let mut settings = MainSettings::default();
    for field in ConfigField::ALL {
        settings.set(field, load_field(store, field));
    }
    settings
}

/// Persist one field.
pub fn save_field(store: &dyn SettingsStore, field: ConfigField, value: &str) -> Result<()> {
    store.set(field.section(), field.key(), value)?;
    info!(field = %field, "Setting saved");
    Ok(())
}

/// Validate and persist a value typed by the user.
///
/// Node names and roles are checked against their field rules; path
/// values are stored as typed and normalized by the next reconcile.
pub fn apply_field_edit(store: &dyn SettingsStore, field: ConfigField, raw: &str) -> Result<()> {
    let value = match field {
        ConfigField::PbName => NodeName::parse(raw)?.to_string(),
        ConfigField::Role => raw.parse::<Role>()?.to_string(),
        _ => raw.to_string(),
    };
    save_field(store, field, &value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::settings::MemorySettingsStore;
    use crate::domain::error::DomainError;
    use crate::error::Error;

    #[test]
    fn unset_fields_load_as_empty() {
        let store = MemorySettingsStore::new();
        store.set("main", "pbdir", "/opt/pb").unwrap();
        let settings = load_main_settings(&store);
        assert_eq!(settings.pbdir, "/opt/pb");
        assert_eq!(settings.pb7dir, "");
        assert_eq!(settings.role, "");
    }

    #[test]
    fn edits_are_checked_before_saving() {
        let store = MemorySettingsStore::new();
        let err = apply_field_edit(&store, ConfigField::Role, "boss").unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::UnknownRole(_))));
        assert_eq!(store.get("main", "role").unwrap(), None);

        apply_field_edit(&store, ConfigField::Role, "slave").unwrap();
        apply_field_edit(&store, ConfigField::PbName, "node1").unwrap();
        assert_eq!(store.get("main", "role").unwrap().as_deref(), Some("slave"));
        assert_eq!(store.get("main", "pbname").unwrap().as_deref(), Some("node1"));
    }

    #[test]
    fn path_edits_are_stored_verbatim() {
        let store = MemorySettingsStore::new();
        apply_field_edit(&store, ConfigField::PbDir, "../pb").unwrap();
        assert_eq!(store.get("main", "pbdir").unwrap().as_deref(), Some("../pb"));
    }
}
