use serde::Serialize;

use crate::domain::{
    artifact::{Action, ArtifactKind, Decision},
    request::GenerationRequest,
};

/// Ordered record of every decision taken for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub request: GenerationRequest,
    pub dry_run: bool,
    pub decisions: Vec<Decision>,
}

impl GenerationReport {
    pub fn new(request: GenerationRequest, dry_run: bool) -> Self {
        Self {
            request,
            dry_run,
            decisions: Vec::new(),
        }
    }

    pub fn push(&mut self, decision: Decision) {
        self.decisions.push(decision);
    }

    pub fn decision(&self, kind: ArtifactKind) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.kind == kind)
    }

    pub fn created(&self) -> impl Iterator<Item = &Decision> {
        self.decisions
            .iter()
            .filter(|d| matches!(d.action, Action::Create { .. }))
    }

    pub fn patched(&self) -> impl Iterator<Item = &Decision> {
        self.decisions
            .iter()
            .filter(|d| matches!(d.action, Action::Patch { .. }))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Decision> {
        self.decisions
            .iter()
            .filter(|d| matches!(d.action, Action::Skipped { .. }))
    }

    /// `true` if the run wrote, or would write, at least one file.
    pub fn has_changes(&self) -> bool {
        self.decisions.iter().any(|d| d.content().is_some())
    }
}
