use std::fmt;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    naming::{lower_first, validate_identifier, validate_namespace},
};

/// One generation run, as collected from the operator.
///
/// Invariant: every name has been trimmed and validated. An empty use-case
/// input is stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    namespace: String,
    entity: String,
    use_case: Option<String>,
}

impl GenerationRequest {
    /// Build a request from raw operator input.
    pub fn new(
        namespace: impl AsRef<str>,
        entity: impl AsRef<str>,
        use_case: impl AsRef<str>,
    ) -> Result<Self, DomainError> {
        let namespace = namespace.as_ref().trim().to_string();
        let entity = entity.as_ref().trim().to_string();
        let use_case = use_case.as_ref().trim();

        validate_namespace(&namespace)?;
        validate_identifier("entity", &entity)?;

        let use_case = if use_case.is_empty() {
            None
        } else {
            validate_identifier("use-case", use_case)?;
            Some(use_case.to_string())
        };

        Ok(Self {
            namespace,
            entity,
            use_case,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn use_case(&self) -> Option<&str> {
        self.use_case.as_deref()
    }

    /// `I<Entity>Service`
    pub fn service_interface(&self) -> String {
        format!("I{}Service", self.entity)
    }

    /// `<Entity>Service`
    pub fn service_class(&self) -> String {
        format!("{}Service", self.entity)
    }

    /// `I<UseCase>UseCase`, when a use case was requested.
    pub fn use_case_interface(&self) -> Option<String> {
        self.use_case.as_deref().map(use_case_interface)
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.namespace, self.entity)?;
        if let Some(use_case) = &self.use_case {
            write!(f, " (+{use_case})")?;
        }
        Ok(())
    }
}

/// `I<UseCase>UseCase`
pub fn use_case_interface(use_case: &str) -> String {
    format!("I{use_case}UseCase")
}

/// `<useCase>UseCase`, the parameter name for an injected use case.
pub fn use_case_parameter(use_case: &str) -> String {
    format!("{}UseCase", lower_first(use_case))
}

/// `_<useCase>UseCase`, the backing field for an injected use case.
pub fn use_case_field(use_case: &str) -> String {
    format!("_{}", use_case_parameter(use_case))
}
