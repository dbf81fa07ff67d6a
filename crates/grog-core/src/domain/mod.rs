// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Grog.
//!
//! Pure data and rules: naming, the generation request, artifact kinds and
//! their paths, and the decisions a run records. All file access, template
//! bodies and text patching are reached through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: A request never changes after construction
//!
pub mod artifact;
pub mod error;
pub mod layout;
pub mod naming;
pub mod report;
pub mod request;

pub use artifact::{Action, ArtifactKind, ArtifactState, Decision};
pub use error::{DomainError, ErrorCategory};
pub use layout::{AnchorPolicy, ProjectLayout, REGISTRATION_MARKER};
pub use naming::lower_first;
pub use report::GenerationReport;
pub use request::GenerationRequest;
