//! The three tiers of a pandas data-source name.
use std::fmt;

use serde::Serialize;

use crate::authority::split_authority;

/// Which validator tier a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    /// `<scheme>://<host>`
    Authority,
    /// `<scheme>:[//<host>]<path>`
    Device,
    /// `<device>::<selector>`
    Attribute,
}

impl NameKind {
    /// Guesses the tier of `name` from its shape, without validating it.
    ///
    /// Any `::` makes the name an attribute. Otherwise a name with nothing
    /// after its authority is an authority, and everything else is treated as
    /// a device so that the device validator can explain what is wrong with it.
    pub fn detect(name: &str) -> Self {
        if name.contains("::") {
            return Self::Attribute;
        }
        match split_authority(name) {
            Ok(prefix) if prefix.rest.is_empty() => Self::Authority,
            Ok(_) | Err(_) => Self::Device,
        }
    }

    /// Lowercase label used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authority => "authority",
            Self::Device => "device",
            Self::Attribute => "attribute",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
