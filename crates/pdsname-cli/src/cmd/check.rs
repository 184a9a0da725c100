//! Implementation of `pdsname check <NAME>... [--file <FILE>]`.
//!
//! Validates every name against the tier chosen by `--kind` (or detected
//! from its shape) and prints the canonical forms of the valid ones.
//!
//! Exit codes:
//! - 0 = every name is valid
//! - 1 = at least one name was rejected
//! - 2 = the names could not be read
use std::io::Write;

use pdsname_core::validate_names;

use crate::KindArg;
use crate::error::CliError;
use crate::format::{FormatterConfig, write_outcome, write_summary};

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `check` command against the standard streams.
///
/// # Errors
///
/// - [`CliError::InvalidNames`] if any name is rejected.
/// - [`CliError::IoError`] if writing to stdout or stderr fails.
pub fn run<S: AsRef<str>>(
    names: &[S],
    kind: KindArg,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    run_with(&mut out, &mut err, names, kind, config)
}

/// Runs the `check` command, writing to the given streams.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with<O: Write, E: Write, S: AsRef<str>>(
    out: &mut O,
    err: &mut E,
    names: &[S],
    kind: KindArg,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let mut invalid = 0usize;

    for name in names {
        let name = name.as_ref();
        let tier = kind.resolve(name);
        let outcome = validate_names(tier, name);
        if outcome.is_err() {
            invalid += 1;
        }
        write_outcome(out, err, name, tier, outcome.as_ref(), config)
            .map_err(|e| CliError::write_failed("stdout", &e))?;
    }

    let total = names.len();
    write_summary(out, err, total - invalid, invalid, config)
        .map_err(|e| CliError::write_failed("stderr", &e))?;

    if invalid > 0 {
        return Err(CliError::InvalidNames { invalid, total });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
