// ============================================================================
// domain/error.rs - NAMING AND REQUEST ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `GrogError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Artifact '{kind}' requires a use case but none was requested")]
    UseCaseRequired { kind: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { field, .. } if *field == "namespace" => vec![
                "Namespaces are dotted identifiers".into(),
                "Examples: Shop, Acme.Shop, Acme.Shop.Api".into(),
            ],
            Self::InvalidName { field, reason, .. } => vec![
                format!("The {} {}", field, reason),
                "Use PascalCase identifiers: Order, GetOrder, ShipOrder".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("A value for '{}' is required", field),
                format!("Pass it with --{} or answer the prompt", field),
            ],
            Self::UseCaseRequired { .. } => {
                vec!["Pass --use-case <NAME> to generate use-case artifacts".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
            Self::UseCaseRequired { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
