//! Progress reporting for slow collaborator construction.

use super::collaborator::CollaboratorKind;

/// Receives construction progress so a front end can show a spinner.
pub trait ConstructionProgress {
    fn started(&self, kind: CollaboratorKind);

    fn finished(&self, kind: CollaboratorKind, ok: bool);
}

/// Discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ConstructionProgress for NoProgress {
    fn started(&self, _kind: CollaboratorKind) {}

    fn finished(&self, _kind: CollaboratorKind, _ok: bool) {}
}
