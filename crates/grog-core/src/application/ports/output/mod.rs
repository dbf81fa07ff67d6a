//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `grog-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, GenerationRequest};
use crate::error::GrogResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `grog_adapters::filesystem::LocalFilesystem` (production)
/// - `grog_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The generator never lists or deletes anything.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GrogResult<()>;

    /// Check if path exists.
    ///
    /// "Not found" is `Ok(false)`; any other failure is an error.
    fn exists(&self, path: &Path) -> GrogResult<bool>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> GrogResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> GrogResult<()>;
}

/// Port for artifact template rendering.
///
/// Implemented by:
/// - `grog_adapters::renderer::CSharpRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Render the full source text of `kind` for `request`.
    ///
    /// For `ArtifactKind::DiRegistration` this is the block of registration
    /// statements to insert after the marker, not a whole file.
    fn render(&self, kind: ArtifactKind, request: &GenerationRequest) -> GrogResult<String>;
}

/// Result of one additive patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The content changed.
    Applied(String),
    /// The dependency is already present; nothing to do.
    AlreadyApplied,
    /// The anchor the patch needs was not found.
    AnchorMissing { anchor: String },
}

/// Port for surgical edits to previously generated files.
///
/// Implemented by:
/// - `grog_adapters::patcher::MarkerPatcher` (literal anchors)
///
/// Every operation is pure and must detect its own prior application.
pub trait SourcePatcher: Send + Sync {
    /// Insert the statements of `block` that `content` lacks right after
    /// every occurrence of `marker`. The marker is kept.
    fn patch_registration(&self, content: &str, marker: &str, block: &str) -> PatchOutcome;

    /// Make `I<entity>Service` extend `I<use_case>UseCase`, ahead of any
    /// existing bases.
    fn patch_interface_base_list(&self, content: &str, entity: &str, use_case: &str)
    -> PatchOutcome;

    /// Inject `I<use_case>UseCase` into the `<entity>Service` constructor:
    /// field, parameter and assignment.
    fn patch_constructor_injection(
        &self,
        content: &str,
        entity: &str,
        use_case: &str,
    ) -> PatchOutcome;
}
