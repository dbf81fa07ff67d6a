//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `grog -v generate`
//! and `grog generate -v` mean the same thing.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log verbosity: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity on stderr:
    (none)  - Warnings and errors (skipped patches show up here)
    -v      - Info level (one line per artifact written)
    -vv     - Debug level (every decision and file-store call)
    -vvv    - Trace level"
    )]
    pub verbose: u8,

    /// Only errors are printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Plain output without ANSI codes. Also set by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Config file to load instead of the platform default.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Use `output.format` from the config, else detect the terminal.
    #[default]
    Auto,
    /// Symbols and colors.
    Human,
    /// Symbols, no colors.
    Plain,
    /// The generation report as JSON.
    Json,
}

impl OutputFormat {
    /// Resolve `Auto` against the configured format name and whether stdout
    /// is a terminal. Never returns `Auto`.
    pub fn resolve(self, configured: &str, stdout_is_tty: bool) -> Self {
        let detected = if stdout_is_tty { Self::Human } else { Self::Plain };

        match self {
            Self::Auto => match Self::from_str(configured, true) {
                Ok(Self::Auto) | Err(_) => detected,
                Ok(format) => format,
            },
            explicit => explicit,
        }
    }
}
