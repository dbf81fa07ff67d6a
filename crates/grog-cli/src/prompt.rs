//! Collecting the generation inputs from flags or the terminal.

use crate::{cli::GenerateArgs, error::CliResult};

/// The three raw strings a generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub namespace: String,
    pub entity: String,
    /// Empty means no use case.
    pub use_case: String,
}

/// Take each value from its flag, prompting for the ones that are missing.
///
/// The use case is only prompted for when something else was prompted for
/// too; `grog generate -n Shop -e Order` runs without any prompt.
pub fn collect(args: &GenerateArgs) -> CliResult<Answers> {
    let interactive = args.namespace.is_none() || args.entity.is_none();

    let namespace = match &args.namespace {
        Some(value) => value.clone(),
        None => ask("Project namespace (e.g. Acme.Shop)", false)?,
    };
    let entity = match &args.entity {
        Some(value) => value.clone(),
        None => ask("Controller (entity) name", false)?,
    };
    let use_case = match &args.use_case {
        Some(value) => value.clone(),
        None if interactive => ask("Use case name (leave empty to skip)", true)?,
        None => String::new(),
    };

    Ok(Answers {
        namespace,
        entity,
        use_case,
    })
}

#[cfg(feature = "interactive")]
fn ask(prompt: &str, allow_empty: bool) -> CliResult<String> {
    use crate::error::CliError;

    tracing::debug!(prompt, "Prompting");
    dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| CliError::IoError {
            message: format!("failed to read '{prompt}'"),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn ask(_prompt: &str, _allow_empty: bool) -> CliResult<String> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
