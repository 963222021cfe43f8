//! Session bootstrap: reconcile form edits with persisted settings and
//! make sure every collaborator exists.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::application::session::SessionContext;
use crate::application::settings::{load_field, save_field};
use crate::domain::path::{field_status, normalize_traversal};
use crate::domain::{ConfigField, FieldStatus, NodeName, PathField, Role};
use crate::port::outbound::{
    CollaboratorFactory, CollaboratorKind, ConstructionProgress, SettingsStore,
};

/// Glyphs for the four path fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStatuses {
    /// V6 install directory holds `passivbot.py`.
    pub pbdir: FieldStatus,
    /// V6 interpreter is a file named `python*`.
    pub pbvenv: FieldStatus,
    /// V7 install directory holds `src/passivbot.py`.
    pub pb7dir: FieldStatus,
    /// V7 interpreter is a file named `python*`.
    pub pb7venv: FieldStatus,
}

impl FieldStatuses {
    #[must_use]
    pub const fn get(&self, field: PathField) -> FieldStatus {
        match field {
            PathField::PbDir => self.pbdir,
            PathField::PbVenv => self.pbvenv,
            PathField::Pb7Dir => self.pb7dir,
            PathField::Pb7Venv => self.pb7venv,
        }
    }

    #[must_use]
    pub const fn all_ok(&self) -> bool {
        self.pbdir.is_ok() && self.pbvenv.is_ok() && self.pb7dir.is_ok() && self.pb7venv.is_ok()
    }
}

/// Runs once per visit before validation.
///
/// Reconciling twice without new edits writes nothing and constructs
/// nothing the second time.
pub struct SessionBootstrapper<'a> {
    store: &'a dyn SettingsStore,
    factory: &'a dyn CollaboratorFactory,
    host_name: String,
    base_dir: PathBuf,
}

impl<'a> SessionBootstrapper<'a> {
    /// `host_name` seeds an unset node name; `base_dir` resolves relative
    /// paths that contain `..`.
    pub fn new(
        store: &'a dyn SettingsStore,
        factory: &'a dyn CollaboratorFactory,
        host_name: impl Into<String>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            factory,
            host_name: host_name.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Apply pending form edits, normalize `..` paths, default the bot
    /// name, load the role once and build missing collaborators.
    ///
    /// Only values that differ from the session cache are written. A
    /// changed install directory invalidates the path-dependent
    /// collaborators before they are rebuilt. Store and construction
    /// failures are logged and never abort the pass.
    ///
    /// Returns the OK/FAIL status of each path field.
    pub fn reconcile(
        &self,
        session: &mut SessionContext,
        progress: &dyn ConstructionProgress,
    ) -> FieldStatuses {
        let statuses = FieldStatuses {
            pbdir: self.reconcile_path(session, PathField::PbDir),
            pbvenv: self.reconcile_path(session, PathField::PbVenv),
            pb7dir: self.reconcile_path(session, PathField::Pb7Dir),
            pb7venv: self.reconcile_path(session, PathField::Pb7Venv),
        };
        self.reconcile_node_name(session);
        self.reconcile_role(session);
        self.ensure_collaborators(session, progress);
        statuses
    }

    /// Store a path chosen with the path picker.
    ///
    /// Any pending edit for the field is dropped so it cannot overwrite the
    /// picked value on the next reconcile.
    pub fn pick_path(&self, session: &mut SessionContext, field: PathField, value: &str) {
        session.inputs.clear_path(field);
        self.persist(field.config_field(), value);
        if field.is_directory() {
            session.collaborators.invalidate_path_dependent();
        }
    }

    fn reconcile_path(&self, session: &mut SessionContext, field: PathField) -> FieldStatus {
        let config_field = field.config_field();
        let previous = session.cached.path(field).to_string();

        if let Some(pending) = session.inputs.path(field) {
            if pending != previous {
                let pending = pending.to_string();
                self.persist(config_field, &pending);
                session.cached.set(config_field, pending);
            }
        }

        let mut value = load_field(self.store, config_field);
        if let Some(normalized) = normalize_traversal(&value, &self.base_dir) {
            info!(field = %field, from = %value, to = %normalized, "Normalized path");
            self.persist(config_field, &normalized);
            if session.inputs.path(field).is_some() {
                session.inputs.set_path(field, normalized.clone());
            }
            value = normalized;
        }

        if field.is_directory() && value != previous {
            session.collaborators.invalidate_path_dependent();
        }

        let status = field_status(field, &value);
        session.cached.set(config_field, value);
        status
    }

    fn reconcile_node_name(&self, session: &mut SessionContext) {
        session.input_error = None;
        if let Some(pending) = session.inputs.pbname.clone() {
            if pending != session.cached.pbname {
                match NodeName::parse(&pending) {
                    Ok(name) => self.persist(ConfigField::PbName, name.as_str()),
                    Err(e) => {
                        warn!(error = %e, "Rejected bot name edit");
                        session.input_error = Some(e);
                    }
                }
            }
        }

        let mut name = load_field(self.store, ConfigField::PbName);
        if name.is_empty() {
            name = NodeName::from_host(&self.host_name).to_string();
            self.persist(ConfigField::PbName, &name);
        }
        session.cached.pbname = name;
    }

    fn reconcile_role(&self, session: &mut SessionContext) {
        if !session.role_loaded {
            let role = load_field(self.store, ConfigField::Role);
            session.master = role == Role::Master.as_str();
            session.cached.role = role;
            session.role_loaded = true;
        }

        if let Some(master) = session.inputs.master {
            if master != session.master {
                let role = Role::from_master_flag(master);
                self.persist(ConfigField::Role, role.as_str());
                session.master = master;
                session.cached.role = role.to_string();
            }
        }
    }

    fn ensure_collaborators(&self, session: &mut SessionContext, progress: &dyn ConstructionProgress) {
        let settings = session.cached.clone();
        for kind in CollaboratorKind::ALL {
            if session.collaborators.contains(kind) {
                continue;
            }
            progress.started(kind);
            match session.collaborators.ensure(kind, self.factory, &settings) {
                Ok(_) => progress.finished(kind, true),
                Err(e) => {
                    warn!(collaborator = %kind, error = %e, "Failed to initialize collaborator");
                    progress.finished(kind, false);
                }
            }
        }
    }

    fn persist(&self, field: ConfigField, value: &str) {
        if let Err(e) = save_field(self.store, field, value) {
            warn!(field = %field, error = %e, "Failed to save setting");
        }
    }
}
