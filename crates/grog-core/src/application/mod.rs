//! Application layer for Grog.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain decisions; naming and path
//! rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::GenerationService;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PatchOutcome, SourcePatcher, TemplateRenderer};

pub use error::ApplicationError;
