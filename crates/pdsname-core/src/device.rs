//! Device tier: a tabular file addressed by `<scheme>:[//<host>]<path>`.
use serde::Serialize;

use crate::authority::{AuthorityName, split_authority};
use crate::error::InvalidName;
use crate::kind::NameKind;
use crate::path::ResolvedPath;
use crate::scheme::{DataFormat, LOCALHOST, Scheme};
use crate::validator::{NameValidator, Named, reject};

/// A validated device name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeviceName {
    /// The authority with its format-specific scheme (`pds-csv`/`pds-xls`).
    pub authority: AuthorityName,
    /// The resolved file path.
    pub path: ResolvedPath,
    /// Format pinned by the scheme or inferred from the extension.
    pub format: DataFormat,
}

impl Named for DeviceName {
    fn full_name(&self) -> String {
        format!("{}{}", self.authority.full_name(), self.path)
    }

    fn normalized_name(&self) -> String {
        self.path.to_string()
    }

    fn short_name(&self) -> String {
        self.path.file_name().to_owned()
    }
}

/// Validates device names such as `pds:/path/to/file.csv`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceNameValidator;

impl DeviceNameValidator {
    pub(crate) fn parse(name: &str) -> Result<DeviceName, &'static str> {
        let prefix = split_authority(name)?;
        let scheme = prefix.scheme.ok_or("missing scheme")?;
        match prefix.host {
            None | Some("" | LOCALHOST) => {}
            Some(_) => return Err("unrecognized host"),
        }

        let path = ResolvedPath::resolve(prefix.rest)?;
        let format = match scheme.format() {
            Some(format) => format,
            None => path
                .extension()
                .and_then(DataFormat::from_extension)
                .ok_or("cannot infer format from file extension")?,
        };

        Ok(DeviceName {
            authority: AuthorityName {
                scheme: Scheme::for_format(format),
                host: LOCALHOST.to_owned(),
            },
            path,
            format,
        })
    }
}

impl NameValidator for DeviceNameValidator {
    type Parsed = DeviceName;

    fn kind(&self) -> NameKind {
        NameKind::Device
    }

    fn validate(&self, name: &str) -> Result<DeviceName, InvalidName> {
        Self::parse(name).map_err(|reason| reject(NameKind::Device, name, reason))
    }
}
