//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ProjectLayout`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. `GROG_`-prefixed environment variables, `__` between section and key
//!    (`GROG_GENERATION__EXTENSION=cs`)
//! 3. `./.grog.toml`
//! 4. The `--config` file, or the platform config file
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use grog_core::domain::{AnchorPolicy, ProjectLayout};
use serde::{Deserialize, Serialize};

/// File name of the per-directory config written by `grog init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".grog.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

/// Where and how artifacts are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Project root the artifact paths are relative to.
    pub root: PathBuf,
    /// Source file extension, without the dot.
    pub extension: String,
    /// Stem of the composition-root file holding the DI marker.
    pub registration_file: String,
    /// Abort on a missing patch anchor instead of skipping the artifact.
    pub strict_anchors: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let layout = ProjectLayout::default();
        Self {
            root: layout.root().to_path_buf(),
            extension: layout.extension().to_string(),
            registration_file: layout.registration_file().to_string(),
            strict_anchors: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// An explicit `config_file` must exist; the platform and local files
    /// are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            config_file.map(PathBuf::as_path),
            Path::new(LOCAL_CONFIG_FILE),
            Self::environment(),
        )
    }

    /// [`Self::load`] with the local file and environment source supplied.
    fn load_from(
        config_file: Option<&Path>,
        local_file: &Path,
        env: Environment,
    ) -> anyhow::Result<Self> {
        let global = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to build default config")?,
            )
            .add_source(global)
            .add_source(File::from(local_file).required(false))
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// `GROG_`-prefixed variables, `__` between section and key.
    fn environment() -> Environment {
        Environment::with_prefix("GROG")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Path to the platform configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.grog.toml` in the
    /// current directory when no home directory is known.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "grog", "grog")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Layout for a run, before per-invocation flag overrides.
    pub fn layout(&self) -> ProjectLayout {
        let policy = if self.generation.strict_anchors {
            AnchorPolicy::Fail
        } else {
            AnchorPolicy::Warn
        };

        ProjectLayout::new(&self.generation.root)
            .with_extension(&self.generation.extension)
            .with_registration_file(self.generation.registration_file.clone())
            .with_anchor_policy(policy)
    }
}
