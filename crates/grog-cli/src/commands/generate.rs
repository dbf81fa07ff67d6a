//! Implementation of the `grog generate` command.
//!
//! Responsibility: turn flags, prompts and config into a request and a
//! layout, run the core generation service against the real filesystem, and
//! display the report. No generation logic lives here.

use tracing::{debug, instrument};

use grog_adapters::{CSharpRenderer, LocalFilesystem, MarkerPatcher};
use grog_core::{
    application::GenerationService,
    domain::{AnchorPolicy, GenerationRequest, ProjectLayout},
    error::GrogError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
};

/// Execute the `grog generate` command.
///
/// 1. Collect namespace, entity and use case (flags, then prompts)
/// 2. Validate them into a `GenerationRequest`
/// 3. Resolve the layout (config, then flag overrides)
/// 4. Plan (`--dry-run`) or generate
/// 5. Print the report
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let answers = prompt::collect(&args)?;
    let request = GenerationRequest::new(&answers.namespace, &answers.entity, &answers.use_case)
        .map_err(GrogError::from)?;

    let layout = resolve_layout(&args, &config);
    debug!(
        request = %request,
        root = %layout.root().display(),
        extension = layout.extension(),
        policy = ?layout.anchor_policy(),
        "Layout resolved"
    );

    let service = GenerationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(CSharpRenderer::new()),
        Box::new(MarkerPatcher::new()),
        layout,
    );

    if output.format() != OutputFormat::Json {
        output.header(&format!("Generating {request}"))?;
    }

    let report = if args.dry_run {
        service.plan(&request)?
    } else {
        service.generate(&request)?
    };

    output.report(&report)
}

/// Config values with the per-invocation flags applied on top.
fn resolve_layout(args: &GenerateArgs, config: &AppConfig) -> ProjectLayout {
    let mut layout = config.layout();

    if let Some(root) = &args.root {
        layout = layout.with_root(root);
    }
    if let Some(ext) = &args.ext {
        layout = layout.with_extension(ext);
    }
    if args.strict_anchors {
        layout = layout.with_anchor_policy(AnchorPolicy::Fail);
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn args() -> GenerateArgs {
        GenerateArgs {
            namespace: Some("Shop".into()),
            entity: Some("Order".into()),
            use_case: None,
            dry_run: false,
            root: None,
            ext: None,
            strict_anchors: false,
        }
    }

    #[test]
    fn layout_defaults_come_from_config() {
        let mut config = AppConfig::default();
        config.generation.extension = "txt".into();
        config.generation.strict_anchors = true;

        let layout = resolve_layout(&args(), &config);
        assert_eq!(layout.root(), Path::new("."));
        assert_eq!(layout.extension(), "txt");
        assert_eq!(layout.anchor_policy(), AnchorPolicy::Fail);
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.generation.registration_file = "Startup".into();

        let args = GenerateArgs {
            root: Some(PathBuf::from("/work/api")),
            ext: Some(".cs".into()),
            strict_anchors: true,
            ..args()
        };
        let layout = resolve_layout(&args, &config);
        assert_eq!(layout.root(), Path::new("/work/api"));
        assert_eq!(layout.extension(), "cs");
        assert_eq!(layout.registration_file(), "Startup");
        assert_eq!(layout.anchor_policy(), AnchorPolicy::Fail);
    }
}
