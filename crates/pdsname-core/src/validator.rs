//! The validator contract shared by the three tiers.
use serde::Serialize;

use crate::attribute::AttributeNameValidator;
use crate::authority::AuthorityNameValidator;
use crate::device::DeviceNameValidator;
use crate::error::InvalidName;
use crate::kind::NameKind;

/// The canonical renderings of a valid name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Names {
    /// Fully qualified `<scheme>://<host><path>[::<selector>]`.
    pub full: String,
    /// The name without scheme (authority) or without authority (device,
    /// attribute).
    pub normalized: String,
    /// Minimal display fragment: host, file name or selector text.
    pub short: String,
}

impl Names {
    /// Returns `(full, normalized, short)`.
    pub fn into_tuple(self) -> (String, String, String) {
        (self.full, self.normalized, self.short)
    }
}

/// A parsed name that can render its [`Names`].
pub trait Named {
    /// See [`Names::full`].
    fn full_name(&self) -> String;
    /// See [`Names::normalized`].
    fn normalized_name(&self) -> String;
    /// See [`Names::short`].
    fn short_name(&self) -> String;

    /// All three renderings at once.
    fn names(&self) -> Names {
        Names {
            full: self.full_name(),
            normalized: self.normalized_name(),
            short: self.short_name(),
        }
    }
}

/// A validator for one tier of pandas names.
///
/// Validation is total: every input string yields either a parsed value or
/// an [`InvalidName`], never a panic. Implementations are stateless and may be
/// shared freely between threads.
pub trait NameValidator {
    /// The structured result of a successful validation.
    type Parsed: Named;

    /// The tier this validator handles.
    fn kind(&self) -> NameKind;

    /// Parses and validates `name`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidName`] when `name` does not belong to this tier's
    /// grammar.
    fn validate(&self, name: &str) -> Result<Self::Parsed, InvalidName>;

    /// Validates `name` and returns its canonical renderings.
    ///
    /// # Errors
    ///
    /// Same as [`NameValidator::validate`].
    fn names(&self, name: &str) -> Result<Names, InvalidName> {
        let parsed = self.validate(name)?;
        let names = parsed.names();
        log::trace!("accepted {} name {name:?} as {:?}", self.kind(), names.full);
        Ok(names)
    }

    /// Returns `true` if `name` validates.
    fn is_valid(&self, name: &str) -> bool {
        self.validate(name).is_ok()
    }
}

/// Builds an [`InvalidName`] and logs the rejection.
pub(crate) fn reject(kind: NameKind, name: &str, reason: &'static str) -> InvalidName {
    log::debug!("rejected {kind} name {name:?}: {reason}");
    InvalidName::new(kind, name, reason)
}

/// Validates `name` with the validator for `kind`.
///
/// # Errors
///
/// Returns [`InvalidName`] when `name` is not a valid name of that tier.
pub fn validate_names(kind: NameKind, name: &str) -> Result<Names, InvalidName> {
    match kind {
        NameKind::Authority => AuthorityNameValidator.names(name),
        NameKind::Device => DeviceNameValidator.names(name),
        NameKind::Attribute => AttributeNameValidator.names(name),
    }
}
