//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use grog_core::{
    domain::{Action, Decision, GenerationReport, REGISTRATION_MARKER},
    error::GrogError,
};

use crate::{
    cli::global::{GlobalArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = args
            .output_format
            .resolve(&config.output.format, io::stdout().is_terminal());

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Print a generation report in the resolved format.
    ///
    /// JSON is written even in quiet mode since it is the command's result,
    /// not commentary.
    pub fn report(&self, report: &GenerationReport) -> CliResult<()> {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(report).map_err(|e| GrogError::Internal {
                message: format!("failed to serialise report: {e}"),
            })?;
            self.term.write_line(&json)?;
            return Ok(());
        }

        for decision in report.decisions.iter().filter(|d| d.is_notable()) {
            self.decision(decision, report.dry_run)?;
        }

        let created = report.created().count();
        let patched = report.patched().count();
        if report.dry_run {
            self.info(&format!(
                "Dry run: {created} to create, {patched} to patch, nothing written"
            ))?;
        } else if report.has_changes() {
            self.success(&format!(
                "{} ready: {created} created, {patched} patched",
                report.request
            ))?;
        } else {
            self.info(&format!("{} is up to date", report.request))?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn decision(&self, decision: &Decision, dry_run: bool) -> io::Result<()> {
        let path = decision.path.display();
        let kind = decision.kind;

        match &decision.action {
            Action::Create { .. } if dry_run => self.info(&format!("Would create {kind}: {path}")),
            Action::Create { .. } => self.success(&format!("Created {kind}: {path}")),
            Action::Patch { .. } if dry_run => self.info(&format!("Would patch {kind}: {path}")),
            Action::Patch { .. } => self.success(&format!("Patched {kind}: {path}")),
            Action::Skipped { reason } => self.warning(&format!("Skipped {kind}: {path} ({reason})")),
            Action::Emit { block } => {
                self.warning(&format!(
                    "{path} not found; add these lines after '{REGISTRATION_MARKER}':"
                ))?;
                for line in block.lines() {
                    self.print(&format!("    {line}"))?;
                }
                Ok(())
            }
            Action::Unchanged => Ok(()),
        }
    }

    fn symbol_line(
        &self,
        symbol: &str,
        msg: &str,
        style: impl Fn(&str) -> String,
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {msg}", style(symbol))
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
