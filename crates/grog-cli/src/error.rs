//! Error handling for the grog CLI.
//!
//! Every failure ends up as a [`CliError`], which knows its exit code, its
//! suggestions and how to render itself for a terminal or a pipe.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use grog_core::error::{ErrorCategory as CoreCategory, GrogError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Unknown key passed to `grog config get`.
    #[error("Unknown config key '{key}'")]
    UnknownConfigKey { key: String },

    /// An error propagated from `grog-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] GrogError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A value has to be prompted for but the build has no prompt support.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                format!(
                    "Check the config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                format!(
                    "Or the local {} in the current directory",
                    crate::config::LOCAL_CONFIG_FILE
                ),
                "Use 'grog init --force' to rewrite the defaults".into(),
            ],

            Self::UnknownConfigKey { .. } => vec![
                "Known keys:".into(),
                "  generation.root, generation.extension".into(),
                "  generation.registration_file, generation.strict_anchors".into(),
                "  output.no_color, output.format".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{feature}' feature is not available in this build"),
                "Pass --namespace and --entity (and optionally --use-case) as flags".into(),
                format!("Or install with the feature enabled: cargo install grog-cli --features {feature}"),
            ],
        }
    }

    /// Error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownConfigKey { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render for a terminal, with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = format!(
            "\n{} {}\n\n  {}\n",
            "✗".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        );

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push_str(&format!(
                "\n{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad names or arguments.
    UserError,
    /// A file or anchor that should be there is not.
    NotFound,
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use grog_core::{
        application::ApplicationError,
        domain::{DomainError, GenerationRequest},
    };
    use std::{io, path::PathBuf};

    fn invalid_entity() -> CliError {
        let err = GenerationRequest::new("Shop", "9Order", "").unwrap_err();
        CliError::Core(GrogError::from(err))
    }

    #[test]
    fn invalid_name_is_user_error() {
        let err = invalid_entity();
        assert_eq!(err.exit_code(), 2);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn missing_anchor_is_not_found() {
        let err = CliError::Core(
            ApplicationError::PatchAnchorMissing {
                path: PathBuf::from("Program.cs"),
                anchor: "// Add services to the container.".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 3);
        assert!(err.suggestions().iter().any(|s| s.contains("strict_anchors")));
    }

    #[test]
    fn config_errors_exit_four() {
        let err = CliError::ConfigError {
            message: "bad toml".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
        assert_eq!(CliError::FeatureNotAvailable { feature: "interactive" }.exit_code(), 4);
    }

    #[test]
    fn io_error_is_internal() {
        let err = CliError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn unknown_key_lists_known_keys() {
        let err = CliError::UnknownConfigKey { key: "nope".into() };
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("generation.extension")));
    }

    #[test]
    fn feature_suggestion_names_the_feature() {
        let err = CliError::FeatureNotAvailable { feature: "interactive" };
        assert!(err
            .suggestions()
            .iter()
            .any(|s| s.ends_with("--features interactive")));
    }

    #[test]
    fn format_plain_contains_header_and_suggestions() {
        let s = invalid_entity().format_plain(false);
        assert!(s.contains("Error: Generation failed"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::Core(GrogError::from(DomainError::MissingRequiredField {
            field: "entity",
        }));
        let s = err.format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("--verbose"));
    }
}
