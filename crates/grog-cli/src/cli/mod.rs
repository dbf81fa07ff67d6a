//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "grog",
    bin_name = "grog",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered C# skeleton generator",
    long_about = "Grog generates a controller, a service port and its implementation, \
                  and optionally a use case, for an ASP.NET-style layered project. \
                  Re-running it with a new use case patches the existing service \
                  instead of overwriting it.",
    after_help = "EXAMPLES:\n\
        \x20 grog generate\n\
        \x20 grog generate -n Acme.Shop -e Order -u GetOrder\n\
        \x20 grog generate -n Acme.Shop -e Order -u Ship --dry-run\n\
        \x20 grog completions bash > /usr/share/bash-completion/completions/grog",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate or patch the artifacts for one entity.
    #[command(
        visible_alias = "g",
        about = "Generate controller, service and use-case files",
        after_help = "Values not given as flags are prompted for.\n\n\
            EXAMPLES:\n\
            \x20 grog generate -n Shop -e Order\n\
            \x20 grog generate -n Shop -e Order -u GetOrder --root ./src/Shop.Api\n\
            \x20 grog g -n Shop -e Order -u Ship --output-format json"
    )]
    Generate(GenerateArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 grog init           # platform config directory\n\
            \x20 grog init --local   # ./.grog.toml"
    )]
    Init(InitArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 grog config get generation.extension\n\
            \x20 grog config list\n\
            \x20 grog config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 grog completions bash > ~/.local/share/bash-completion/completions/grog\n\
            \x20 grog completions zsh  > ~/.zfunc/_grog\n\
            \x20 grog completions fish > ~/.config/fish/completions/grog.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `grog generate`.
///
/// When `--namespace` and `--entity` are both given the run is
/// non-interactive and a missing `--use-case` means "no use case".
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Root namespace of the project, e.g. `Acme.Shop`.
    #[arg(short = 'n', long = "namespace", value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Entity name; produces `<Entity>Controller` and `<Entity>Service`.
    #[arg(short = 'e', long = "entity", value_name = "NAME")]
    pub entity: Option<String>,

    /// Use case to add, e.g. `GetOrder`.
    #[arg(short = 'u', long = "use-case", value_name = "NAME")]
    pub use_case: Option<String>,

    /// Report what would change without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Project root (overrides `generation.root`).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Source file extension (overrides `generation.extension`).
    #[arg(long = "ext", value_name = "EXT")]
    pub ext: Option<String>,

    /// Fail instead of skipping when a patch anchor is missing.
    #[arg(long = "strict-anchors")]
    pub strict_anchors: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `grog init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.grog.toml` in the current directory.
    #[arg(long = "local", help = "Create local configuration in current directory")]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `grog config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.extension`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path of the platform configuration file.
    Path,
}
