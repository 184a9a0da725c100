//! URI schemes and the tabular formats they select.
use std::fmt;

use serde::Serialize;

/// The default scheme, used when a name omits it.
pub const DEFAULT_SCHEME: Scheme = Scheme::Pds;

/// The only host a pandas name can refer to.
pub const LOCALHOST: &str = "localhost";

/// Tabular file format understood by the data reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFormat {
    /// Comma-separated values.
    Csv,
    /// Excel workbook (`.xls` and `.xlsx`).
    Xls,
}

impl DataFormat {
    /// Maps a file extension (without the dot) to a format.
    ///
    /// Matching is ASCII case-insensitive. Returns `None` for anything that
    /// is not `csv`, `xls` or `xlsx`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("xls") || ext.eq_ignore_ascii_case("xlsx") {
            Some(Self::Xls)
        } else {
            None
        }
    }

    /// Lowercase label, e.g. `"csv"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xls => "xls",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized URI scheme.
///
/// `pds` leaves the format to be inferred from the file extension; the other
/// two pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scheme {
    /// `pds`
    #[serde(rename = "pds")]
    Pds,
    /// `pds-csv`
    #[serde(rename = "pds-csv")]
    PdsCsv,
    /// `pds-xls`
    #[serde(rename = "pds-xls")]
    PdsXls,
}

impl Scheme {
    /// Parses a scheme token (the text before the first `:`).
    ///
    /// Matching is exact; an empty token is not a scheme.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "pds" => Some(Self::Pds),
            "pds-csv" => Some(Self::PdsCsv),
            "pds-xls" => Some(Self::PdsXls),
            _ => None,
        }
    }

    /// The scheme as written in a name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pds => "pds",
            Self::PdsCsv => "pds-csv",
            Self::PdsXls => "pds-xls",
        }
    }

    /// The format pinned by this scheme, or `None` for generic `pds`.
    pub fn format(self) -> Option<DataFormat> {
        match self {
            Self::Pds => None,
            Self::PdsCsv => Some(DataFormat::Csv),
            Self::PdsXls => Some(DataFormat::Xls),
        }
    }

    /// The format-specific scheme used in canonical device names.
    pub fn for_format(format: DataFormat) -> Self {
        match format {
            DataFormat::Csv => Self::PdsCsv,
            DataFormat::Xls => Self::PdsXls,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
