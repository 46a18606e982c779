//! User-facing output on stdout.
//!
//! Confirmation lines, warnings and reports go through [`OutputManager`] so
//! `--quiet`, `--no-color` and `--output-format` are honoured in one place.
//! Diagnostics belong to `tracing` and go to stderr instead.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde_json::Value;

use crate::cli::global::{GlobalArgs, OutputFormat};

/// Marker and colour of a status line.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    fn mark(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }

    fn paint(self, msg: &str) -> String {
        let mark = self.mark();
        match self {
            Self::Success => format!("{} {}", mark.green().bold(), msg.green()),
            Self::Warning => format!("{} {}", mark.yellow().bold(), msg.yellow()),
            Self::Info => format!("{} {}", mark.blue().bold(), msg.blue()),
        }
    }
}

/// Writes command output according to the global flags.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// `Auto` becomes `Human` on a terminal and `Plain` when piped.
    /// `Plain` never colours.
    pub fn new(args: &GlobalArgs) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            format,
            quiet: args.quiet,
            color: !args.no_color && format != OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    /// A bare line; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.line(|| msg.to_owned())
    }

    /// `✓ <msg>`, used for each file written.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    /// `⚠ <msg>`, e.g. a file `init` left alone.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Warning, msg)
    }

    /// `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    /// Section heading, bold cyan when colour is on.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.line(|| {
            if self.color {
                text.cyan().bold().to_string()
            } else {
                text.to_owned()
            }
        })
    }

    /// One pretty-printed JSON document. Written even under `--quiet`,
    /// since the caller asked for machine output.
    pub fn json(&self, value: &Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// Resolved format; never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format() == OutputFormat::Json
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        self.line(|| {
            if self.color {
                tone.paint(msg)
            } else {
                format!("{} {msg}", tone.mark())
            }
        })
    }

    fn line(&self, render: impl FnOnce() -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quiet: bool, no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            root: None,
            output_format,
        }
    }

    fn human(quiet: bool, no_color: bool) -> OutputManager {
        // Human skips TTY detection
        OutputManager::new(&args(quiet, no_color, OutputFormat::Human))
    }

    #[test]
    fn quiet_drops_status_lines() {
        let out = human(true, true);
        assert!(out.print("hello").is_ok());
        assert!(out.success("Repository created: /x").is_ok());
    }

    #[test]
    fn colour_follows_flag() {
        assert!(human(false, false).supports_color());
        assert!(!human(false, true).supports_color());
    }

    #[test]
    fn plain_format_disables_color() {
        let out = OutputManager::new(&args(false, false, OutputFormat::Plain));
        assert_eq!(out.format(), OutputFormat::Plain);
        assert!(!out.supports_color());
    }

    #[test]
    fn tones_keep_their_marks_uncoloured() {
        assert_eq!(Tone::Success.mark(), "✓");
        assert!(Tone::Warning.paint("careful").contains("careful"));
    }

    #[test]
    fn json_format_is_reported() {
        let out = OutputManager::new(&args(true, true, OutputFormat::Json));
        assert!(out.is_json());
        assert!(out.json(&serde_json::json!([{"class": "ItemRepository"}])).is_ok());
    }
}
