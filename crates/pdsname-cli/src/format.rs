/// Result formatting: human-readable and JSON (NDJSON) modes.
///
/// - **Human mode** (default): valid names are written to stdout as
///   `full<TAB>normalized<TAB>short`; rejected names are written to stderr as
///   `[E] <kind> <name>: <reason>`, colored red when colors are enabled. Colors
///   are disabled when `--no-color` is set, the `NO_COLOR` environment
///   variable is present, or stderr is not a TTY.
/// - **JSON mode**: one self-contained object per name on stdout.
///
/// Quiet mode suppresses valid names and the summary.
use std::io::{IsTerminal as _, Write};

use pdsname_core::{InvalidName, NameKind, Names};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

impl From<crate::OutputFormat> for FormatMode {
    fn from(format: crate::OutputFormat) -> Self {
        match format {
            crate::OutputFormat::Human => Self::Human,
            crate::OutputFormat::Json => Self::Json,
        }
    }
}

/// Configuration for the formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Human or JSON output.
    pub mode: FormatMode,
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Report rejected names only.
    pub quiet: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(mode: FormatMode, no_color_flag: bool, quiet: bool) -> Self {
        Self {
            mode,
            colors: colors_enabled(no_color_flag),
            quiet,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-name records
// ---------------------------------------------------------------------------

/// The JSON shape of one checked name.
#[derive(Debug, Serialize)]
struct CheckRecord<'a> {
    input: &'a str,
    kind: NameKind,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    full: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    short: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

/// Writes the outcome of checking `input` as tier `kind`.
///
/// Valid names go to `out`. In human mode rejections go to `err`; in JSON
/// mode every record goes to `out`.
///
/// # Errors
///
/// Returns an error only if writing fails.
pub fn write_outcome<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    input: &str,
    kind: NameKind,
    outcome: Result<&Names, &InvalidName>,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.mode {
        FormatMode::Human => match outcome {
            Ok(_) if config.quiet => Ok(()),
            Ok(names) => writeln!(out, "{}\t{}\t{}", names.full, names.normalized, names.short),
            Err(e) => write_rejection_human(err, e, config),
        },
        FormatMode::Json => {
            if config.quiet && outcome.is_ok() {
                return Ok(());
            }
            let record = match outcome {
                Ok(names) => CheckRecord {
                    input,
                    kind,
                    valid: true,
                    full: Some(&names.full),
                    normalized: Some(&names.normalized),
                    short: Some(&names.short),
                    reason: None,
                },
                Err(e) => CheckRecord {
                    input,
                    kind,
                    valid: false,
                    full: None,
                    normalized: None,
                    short: None,
                    reason: Some(e.reason()),
                },
            };
            write_json_line(out, &record)
        }
    }
}

/// Writes `[E] <kind> <name>: <reason>`.
///
/// # Errors
///
/// Returns an error only if writing fails.
pub fn write_rejection_human<W: Write>(
    writer: &mut W,
    e: &InvalidName,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.colors {
        writeln!(
            writer,
            "{ANSI_RED}[E]{ANSI_RESET} {} {:?}: {}",
            e.kind(),
            e.name(),
            e.reason()
        )
    } else {
        writeln!(writer, "[E] {} {:?}: {}", e.kind(), e.name(), e.reason())
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Writes the final tally.
///
/// Human mode: `3 valid, 1 invalid` on `err`. JSON mode:
/// `{"summary":{"valid":3,"invalid":1}}` on `out`. Suppressed when quiet.
///
/// # Errors
///
/// Returns an error only if writing fails.
pub fn write_summary<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    valid: usize,
    invalid: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human => writeln!(err, "{valid} valid, {invalid} invalid"),
        FormatMode::Json => write_json_line(
            out,
            &serde_json::json!({ "summary": { "valid": valid, "invalid": invalid } }),
        ),
    }
}

/// Serializes `value` as a single JSON line.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json_line<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
