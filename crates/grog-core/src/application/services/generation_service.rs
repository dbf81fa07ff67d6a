//! Generation Service - main application orchestrator.
//!
//! This service walks the six artifact kinds in dependency order and, for
//! each one:
//! 1. Resolves its path from the request and layout
//! 2. Checks whether it already exists
//! 3. Renders it (absent), patches it (present, new dependency) or leaves it
//! 4. Writes the result
//!
//! A failure at any step aborts the run. Files already written stay.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, PatchOutcome, SourcePatcher, TemplateRenderer},
    },
    domain::{
        Action, AnchorPolicy, ArtifactKind, Decision, GenerationReport, GenerationRequest,
        ProjectLayout, REGISTRATION_MARKER,
    },
    error::GrogResult,
};

/// Main generation service.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    patcher: Box<dyn SourcePatcher>,
    layout: ProjectLayout,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use grog_core::{application::GenerationService, domain::ProjectLayout};
    ///
    /// let service = GenerationService::new(
    ///     filesystem, // impl Filesystem
    ///     renderer,   // impl TemplateRenderer
    ///     patcher,    // impl SourcePatcher
    ///     ProjectLayout::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        patcher: Box<dyn SourcePatcher>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            patcher,
            layout,
        }
    }

    /// Compute every decision for `request` without writing anything.
    #[instrument(skip_all, fields(request = %request))]
    pub fn plan(&self, request: &GenerationRequest) -> GrogResult<GenerationReport> {
        let mut report = GenerationReport::new(request.clone(), true);

        for kind in ArtifactKind::GENERATION_ORDER {
            if let Some(decision) = self.decide(kind, request)? {
                report.push(decision);
            }
        }

        Ok(report)
    }

    /// Decide and apply every artifact for `request`, in order.
    #[instrument(
        skip_all,
        fields(
            request = %request,
            root = %self.layout.root().display()
        )
    )]
    pub fn generate(&self, request: &GenerationRequest) -> GrogResult<GenerationReport> {
        info!("Generating artifacts for {}", request.entity());

        let mut report = GenerationReport::new(request.clone(), false);

        for kind in ArtifactKind::GENERATION_ORDER {
            let Some(decision) = self.decide(kind, request)? else {
                continue;
            };
            self.apply(&decision)?;
            report.push(decision);
        }

        info!(
            created = report.created().count(),
            patched = report.patched().count(),
            skipped = report.skipped().count(),
            "Generation completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// `None` when the kind does not apply to this request.
    fn decide(
        &self,
        kind: ArtifactKind,
        request: &GenerationRequest,
    ) -> GrogResult<Option<Decision>> {
        if kind.requires_use_case() && request.use_case().is_none() {
            return Ok(None);
        }
        let Some(path) = kind.path(request, &self.layout) else {
            return Ok(None);
        };

        let action = if self.filesystem.exists(&path)? {
            self.decide_existing(kind, request, &path)?
        } else {
            let rendered = self.renderer.render(kind, request)?;
            match kind {
                // The composition root belongs to the host project; never create it.
                ArtifactKind::DiRegistration => Action::Emit { block: rendered },
                _ => Action::Create { content: rendered },
            }
        };

        debug!(%kind, path = %path.display(), action = action.name(), "Decision");
        Ok(Some(Decision::new(kind, path, action)))
    }

    fn decide_existing(
        &self,
        kind: ArtifactKind,
        request: &GenerationRequest,
        path: &Path,
    ) -> GrogResult<Action> {
        if !kind.is_patchable() {
            return Ok(Action::Unchanged);
        }

        let outcome = match (kind, request.use_case()) {
            (ArtifactKind::DiRegistration, _) => {
                let block = self.renderer.render(kind, request)?;
                let content = self.filesystem.read_file(path)?;
                self.patcher
                    .patch_registration(&content, REGISTRATION_MARKER, &block)
            }
            (ArtifactKind::ServiceInterface, Some(use_case)) => {
                let content = self.filesystem.read_file(path)?;
                self.patcher
                    .patch_interface_base_list(&content, request.entity(), use_case)
            }
            (ArtifactKind::ServiceImpl, Some(use_case)) => {
                let content = self.filesystem.read_file(path)?;
                self.patcher
                    .patch_constructor_injection(&content, request.entity(), use_case)
            }
            _ => return Ok(Action::Unchanged),
        };

        self.resolve_outcome(kind, path, outcome)
    }

    fn resolve_outcome(
        &self,
        kind: ArtifactKind,
        path: &Path,
        outcome: PatchOutcome,
    ) -> GrogResult<Action> {
        match outcome {
            PatchOutcome::Applied(content) => Ok(Action::Patch { content }),
            PatchOutcome::AlreadyApplied => Ok(Action::Unchanged),
            PatchOutcome::AnchorMissing { anchor } => match self.layout.anchor_policy() {
                AnchorPolicy::Warn => {
                    warn!(
                        %kind,
                        path = %path.display(),
                        anchor = %anchor,
                        "Patch anchor not found, leaving file untouched"
                    );
                    Ok(Action::Skipped {
                        reason: format!("anchor not found: {anchor}"),
                    })
                }
                AnchorPolicy::Fail => Err(ApplicationError::PatchAnchorMissing {
                    path: path.to_path_buf(),
                    anchor,
                }
                .into()),
            },
        }
    }

    fn apply(&self, decision: &Decision) -> GrogResult<()> {
        let Some(content) = decision.content() else {
            return Ok(());
        };

        if let Some(parent) = decision.path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(&decision.path, content)?;

        info!(
            kind = %decision.kind,
            path = %decision.path.display(),
            action = decision.action.name(),
            "Artifact written"
        );
        Ok(())
    }
}
