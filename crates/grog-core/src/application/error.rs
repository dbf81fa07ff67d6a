//! Application layer errors.
//!
//! These errors represent failures in orchestration, not naming rules.
//! Naming errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while deciding and applying artifacts.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A patch anchor was not found and the anchor policy is `Fail`.
    #[error("Patch anchor not found in {path}: '{anchor}'")]
    PatchAnchorMissing { path: PathBuf, anchor: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("File store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run grog from the project root (or pass --root)".into(),
            ],
            Self::PatchAnchorMissing { path, anchor } => vec![
                format!("'{}' was edited by hand or not generated by grog", path.display()),
                format!("Restore the line containing: {}", anchor),
                "Or set generation.strict_anchors = false to skip instead of failing".into(),
            ],
            Self::StoreLockError => vec![
                "The file store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::PatchAnchorMissing { .. } => ErrorCategory::NotFound,
        }
    }
}
