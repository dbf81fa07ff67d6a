//! Name derivation shared by every generator.
//!
//! Type names are PascalCase (`GetOrder`); fields and parameters derived from
//! them are camelCase (`getOrder`). Private fields carry a leading underscore
//! (`_getOrderUseCase`).

use crate::domain::error::DomainError;

/// Lower-case the first character of `identifier`, leaving the rest untouched.
///
/// ```
/// use grog_core::domain::naming::lower_first;
///
/// assert_eq!(lower_first("GetOrder"), "getOrder");
/// assert_eq!(lower_first(""), "");
/// ```
pub fn lower_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Validate a single C#-style identifier.
///
/// The first character must be an ASCII letter or `_`; the rest ASCII
/// alphanumerics or `_`.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Err(DomainError::MissingRequiredField { field });
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid("must start with a letter or '_'"));
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(invalid(&format!("contains invalid character '{bad}'")));
    }

    Ok(())
}

/// Validate a dotted namespace such as `Acme.Shop`.
pub fn validate_namespace(value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::MissingRequiredField { field: "namespace" });
    }

    for segment in value.split('.') {
        if segment.is_empty() {
            return Err(DomainError::InvalidName {
                field: "namespace",
                value: value.to_string(),
                reason: "contains an empty segment".into(),
            });
        }
        validate_identifier("namespace", segment).map_err(|_| DomainError::InvalidName {
            field: "namespace",
            value: value.to_string(),
            reason: format!("segment '{segment}' is not an identifier"),
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_first_handles_empty() {
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn lower_first_only_touches_first_char() {
        assert_eq!(lower_first("GetOrder"), "getOrder");
        assert_eq!(lower_first("X"), "x");
        assert_eq!(lower_first("ship"), "ship");
        assert_eq!(lower_first("HTTPCall"), "hTTPCall");
    }

    #[test]
    fn identifiers_accept_pascal_case() {
        for name in ["Order", "GetOrder", "_Internal", "Order2"] {
            assert!(validate_identifier("entity", name).is_ok(), "rejected {name}");
        }
    }

    #[test]
    fn identifiers_reject_bad_input() {
        assert!(matches!(
            validate_identifier("entity", ""),
            Err(DomainError::MissingRequiredField { field: "entity" })
        ));
        assert!(validate_identifier("entity", "2Order").is_err());
        assert!(validate_identifier("entity", "Get Order").is_err());
        assert!(validate_identifier("entity", "Order-Item").is_err());
    }

    #[test]
    fn namespaces_allow_dots_between_segments() {
        assert!(validate_namespace("Shop").is_ok());
        assert!(validate_namespace("Acme.Shop.Api").is_ok());
        assert!(validate_namespace("Acme..Shop").is_err());
        assert!(validate_namespace(".Shop").is_err());
        assert!(validate_namespace("Acme.9Shop").is_err());
    }
}
