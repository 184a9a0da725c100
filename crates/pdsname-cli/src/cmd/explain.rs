//! Implementation of `pdsname explain <NAME>`.
//!
//! Shows how a single name was parsed: scheme, host, resolved path, data
//! format and selector parts, plus the three canonical renderings.
use std::io::Write;

use pdsname_core::{
    AttributeName, AttributeNameValidator, AuthorityName, AuthorityNameValidator, DeviceName,
    DeviceNameValidator, InvalidName, NameKind, NameValidator, Named, Names, SheetRef,
};
use serde::Serialize;

use crate::KindArg;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, write_rejection_human};

/// A parsed name of any tier, tagged with its kind for JSON output.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Parsed {
    Authority { parsed: AuthorityName, names: Names },
    Device { parsed: DeviceName, names: Names },
    Attribute { parsed: AttributeName, names: Names },
}

impl Parsed {
    fn from_name(kind: NameKind, name: &str) -> Result<Self, InvalidName> {
        Ok(match kind {
            NameKind::Authority => {
                let parsed = AuthorityNameValidator.validate(name)?;
                let names = parsed.names();
                Self::Authority { parsed, names }
            }
            NameKind::Device => {
                let parsed = DeviceNameValidator.validate(name)?;
                let names = parsed.names();
                Self::Device { parsed, names }
            }
            NameKind::Attribute => {
                let parsed = AttributeNameValidator.validate(name)?;
                let names = parsed.names();
                Self::Attribute { parsed, names }
            }
        })
    }

    fn names(&self) -> &Names {
        match self {
            Self::Authority { names, .. }
            | Self::Device { names, .. }
            | Self::Attribute { names, .. } => names,
        }
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `explain` command against the standard streams.
///
/// # Errors
///
/// - [`CliError::InvalidNames`] if the name is rejected.
/// - [`CliError::IoError`] if writing fails.
pub fn run(name: &str, kind: KindArg, config: &FormatterConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    run_with(&mut out, &mut err, name, kind, config)
}

/// Runs the `explain` command, writing to the given streams.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    name: &str,
    kind: KindArg,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let tier = kind.resolve(name);
    let parsed = match Parsed::from_name(tier, name) {
        Ok(parsed) => parsed,
        Err(e) => {
            write_rejection_human(err, &e, config)
                .map_err(|io| CliError::write_failed("stderr", &io))?;
            return Err(CliError::InvalidNames {
                invalid: 1,
                total: 1,
            });
        }
    };

    let written = match config.mode {
        FormatMode::Json => write_json(out, &parsed),
        FormatMode::Human => write_human(out, &parsed),
    };
    written.map_err(|e| CliError::write_failed("stdout", &e))
}

fn write_json<W: Write>(w: &mut W, parsed: &Parsed) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, parsed)?;
    writeln!(w)
}

fn write_human<W: Write>(w: &mut W, parsed: &Parsed) -> std::io::Result<()> {
    match parsed {
        Parsed::Authority { parsed, .. } => {
            writeln!(w, "kind:       authority")?;
            write_authority(w, parsed)?;
        }
        Parsed::Device { parsed, .. } => {
            writeln!(w, "kind:       device")?;
            write_device(w, parsed)?;
        }
        Parsed::Attribute { parsed, .. } => {
            writeln!(w, "kind:       attribute")?;
            write_device(w, &parsed.device)?;
            write_selector(w, parsed)?;
        }
    }
    let names = parsed.names();
    writeln!(w, "full:       {}", names.full)?;
    writeln!(w, "normalized: {}", names.normalized)?;
    writeln!(w, "short:      {}", names.short)
}

fn write_authority<W: Write>(w: &mut W, authority: &AuthorityName) -> std::io::Result<()> {
    writeln!(w, "scheme:     {}", authority.scheme)?;
    writeln!(w, "host:       {}", authority.host)
}

fn write_device<W: Write>(w: &mut W, device: &DeviceName) -> std::io::Result<()> {
    write_authority(w, &device.authority)?;
    if let Some(drive) = device.path.drive() {
        writeln!(w, "drive:      {drive}:")?;
    }
    writeln!(w, "path:       {}", device.path)?;
    writeln!(w, "format:     {}", device.format)
}

fn write_selector<W: Write>(w: &mut W, attribute: &AttributeName) -> std::io::Result<()> {
    let selector = &attribute.selector;
    match &selector.sheet {
        Some(SheetRef::First) => writeln!(w, "sheet:      (first)")?,
        Some(SheetRef::Named(name)) => writeln!(w, "sheet:      {name}")?,
        None => {}
    }
    if let Some(columns) = &selector.columns {
        writeln!(w, "columns:    {}", columns.join(", "))?;
    }
    if let Some(rows) = &selector.rows {
        match rows.end {
            Some(end) => writeln!(w, "rows:       {}..{end}", rows.start)?,
            None => writeln!(w, "rows:       {}..", rows.start)?,
        }
    }
    if let Some(options) = &selector.options {
        let keys: Vec<&str> = options.keys().map(String::as_str).collect();
        writeln!(w, "options:    {}", keys.join(", "))?;
    }
    Ok(())
}
