//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pdsname_core::NameKind;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` writes tab-separated names to stdout and diagnostics to stderr.
/// `Json` writes one JSON object per name (NDJSON) to stdout.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// Which validator to apply to each name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Guess from the shape of each name (default).
    Auto,
    /// `<scheme>://<host>`
    Authority,
    /// `<scheme>:<path>`
    Device,
    /// `<device>::<selector>`
    Attribute,
}

impl KindArg {
    /// Resolves the tier to validate `name` against.
    pub fn resolve(self, name: &str) -> NameKind {
        match self {
            Self::Auto => NameKind::detect(name),
            Self::Authority => NameKind::Authority,
            Self::Device => NameKind::Device,
            Self::Attribute => NameKind::Attribute,
        }
    }
}

/// All top-level subcommands exposed by the `pdsname` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Validate names and print their canonical forms.
    Check {
        /// Names to validate.
        #[arg(value_name = "NAME")]
        names: Vec<String>,
        /// Also read names, one per line, from a file or `-` for stdin.
        #[arg(long, value_name = "FILE")]
        file: Option<PathOrStdin>,
        /// Validator to apply: auto (default), authority, device or attribute.
        #[arg(long, default_value = "auto")]
        kind: KindArg,
    },

    /// Show the parsed structure of a single name.
    Explain {
        /// The name to parse.
        #[arg(value_name = "NAME")]
        name: String,
        /// Validator to apply: auto (default), authority, device or attribute.
        #[arg(long, default_value = "auto")]
        kind: KindArg,
    },

    /// Print the pdsname-core library version.
    Version,
}

/// Root CLI struct for the `pdsname` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "pdsname",
    version,
    about = "Validate pandas data-source names",
    long_about = "Validates and normalizes pds, pds-csv and pds-xls names:\n\
                  authorities, file devices and column/row attribute selectors."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    ///
    /// Can also be set via the `PDSNAME_FORMAT` environment variable.
    #[arg(
        long,
        short = 'f',
        default_value = "human",
        global = true,
        env = "PDSNAME_FORMAT"
    )]
    pub format: OutputFormat,

    /// Only report rejected names (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log the reason for every decision to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum size in bytes of a `--file` input.
    ///
    /// Can also be set via the `PDSNAME_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MB).
    #[arg(
        long,
        global = true,
        env = "PDSNAME_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// A set `NO_COLOR` environment variable (<https://no-color.org>) has the
    /// same effect whatever its value; it is read when colors are chosen, not
    /// parsed here.
    #[arg(long, global = true)]
    pub no_color: bool,
}
