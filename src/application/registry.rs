//! Per-session collaborator registry.
//!
//! Holds at most one instance of each collaborator. Construction happens
//! through [`Collaborators::ensure`]; removal through
//! [`Collaborators::invalidate`], which forces the next ensure to rebuild.

use std::fmt;

use tracing::{debug, info};

use crate::domain::MainSettings;
use crate::error::Result;
use crate::port::outbound::{
    CollaboratorFactory, CollaboratorKind, InstanceRegistry, InstanceScope, ServiceRegistry,
    UserDirectory,
};

#[derive(Default)]
pub struct Collaborators {
    users: Option<Box<dyn UserDirectory>>,
    instances: Option<Box<dyn InstanceRegistry>>,
    multi_instances: Option<Box<dyn InstanceRegistry>>,
    v7_instances: Option<Box<dyn InstanceRegistry>>,
    services: Option<Box<dyn ServiceRegistry>>,
}

impl Collaborators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, kind: CollaboratorKind) -> bool {
        match kind {
            CollaboratorKind::Users => self.users.is_some(),
            CollaboratorKind::Instances => self.instances.is_some(),
            CollaboratorKind::MultiInstances => self.multi_instances.is_some(),
            CollaboratorKind::V7Instances => self.v7_instances.is_some(),
            CollaboratorKind::Services => self.services.is_some(),
        }
    }

    #[must_use]
    pub fn users(&self) -> Option<&dyn UserDirectory> {
        self.users.as_deref()
    }

    #[must_use]
    pub fn instances(&self, scope: InstanceScope) -> Option<&dyn InstanceRegistry> {
        match scope {
            InstanceScope::Single => self.instances.as_deref(),
            InstanceScope::Multi => self.multi_instances.as_deref(),
            InstanceScope::V7 => self.v7_instances.as_deref(),
        }
    }

    #[must_use]
    pub fn services(&self) -> Option<&dyn ServiceRegistry> {
        self.services.as_deref()
    }

    /// Build `kind` unless it already exists.
    ///
    /// Returns `true` when a new instance was constructed. On error the
    /// slot stays empty and the next call retries.
    pub fn ensure(
        &mut self,
        kind: CollaboratorKind,
        factory: &dyn CollaboratorFactory,
        settings: &MainSettings,
    ) -> Result<bool> {
        if self.contains(kind) {
            return Ok(false);
        }
        match kind {
            CollaboratorKind::Users => self.users = Some(factory.users(settings)?),
            CollaboratorKind::Services => self.services = Some(factory.services()?),
            CollaboratorKind::Instances => {
                self.instances = Some(factory.instances(InstanceScope::Single, settings)?);
            }
            CollaboratorKind::MultiInstances => {
                self.multi_instances = Some(factory.instances(InstanceScope::Multi, settings)?);
            }
            CollaboratorKind::V7Instances => {
                self.v7_instances = Some(factory.instances(InstanceScope::V7, settings)?);
            }
        }
        debug!(collaborator = %kind, "Collaborator constructed");
        Ok(true)
    }

    /// Drop `kind`. Returns `true` when an instance was removed.
    pub fn invalidate(&mut self, kind: CollaboratorKind) -> bool {
        let removed = match kind {
            CollaboratorKind::Users => self.users.take().is_some(),
            CollaboratorKind::Instances => self.instances.take().is_some(),
            CollaboratorKind::MultiInstances => self.multi_instances.take().is_some(),
            CollaboratorKind::V7Instances => self.v7_instances.take().is_some(),
            CollaboratorKind::Services => self.services.take().is_some(),
        };
        if removed {
            info!(collaborator = %kind, "Collaborator invalidated");
        }
        removed
    }

    /// Drop every collaborator that caches install-directory paths.
    pub fn invalidate_path_dependent(&mut self) {
        for kind in CollaboratorKind::PATH_DEPENDENT {
            self.invalidate(kind);
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let present: Vec<_> = CollaboratorKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .map(CollaboratorKind::label)
            .collect();
        f.debug_struct("Collaborators")
            .field("present", &present)
            .finish()
    }
}
