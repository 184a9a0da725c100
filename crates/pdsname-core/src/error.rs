//! The single failure mode of every validator.
use crate::kind::NameKind;

/// A name was rejected by one of the validators.
///
/// Which grammar rule failed is reported through [`InvalidName::reason`] for
/// diagnostics only; callers should treat every `InvalidName` alike.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} name {name:?}: {reason}")]
pub struct InvalidName {
    kind: NameKind,
    name: String,
    reason: &'static str,
}

impl InvalidName {
    pub(crate) fn new(kind: NameKind, name: &str, reason: &'static str) -> Self {
        Self {
            kind,
            name: name.to_owned(),
            reason,
        }
    }

    /// The tier whose validator rejected the name.
    pub fn kind(&self) -> NameKind {
        self.kind
    }

    /// The rejected input, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short human-readable description of the rule that failed.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}
