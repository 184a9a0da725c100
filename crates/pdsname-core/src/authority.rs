//! Authority tier: `<scheme>://<host>` and the implicit `//<host>` form.
//!
//! [`split_authority`] is shared with the device tier, which accepts the same
//! prefix but with looser rules on which parts may be omitted.
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::InvalidName;
use crate::kind::NameKind;
use crate::scheme::{DEFAULT_SCHEME, LOCALHOST, Scheme};
use crate::validator::{NameValidator, Named, reject};

/// Matches a leading RFC 3986 scheme token and its `:`.
static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):")
        .unwrap_or_else(|_| unreachable!("scheme pattern is a valid regex"))
});

/// A name cut into scheme, authority host and remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorityPrefix<'a> {
    /// `None` when the name has no `<scheme>:` prefix.
    pub scheme: Option<Scheme>,
    /// `None` when no `//` follows the scheme; `Some("")` for `///path`.
    pub host: Option<&'a str>,
    /// Everything after the host (for devices, the path).
    pub rest: &'a str,
}

/// Splits `name` into its scheme, host and remainder.
///
/// The host runs from `//` up to the next `/`. Nothing is validated beyond
/// the scheme token; callers decide which parts are mandatory.
pub(crate) fn split_authority(name: &str) -> Result<AuthorityPrefix<'_>, &'static str> {
    let (scheme, after_scheme) = match SCHEME_RE.captures(name) {
        Some(caps) => {
            let token = caps.get(1).map_or("", |m| m.as_str());
            let scheme = Scheme::parse(token).ok_or("unrecognized scheme")?;
            (Some(scheme), &name[token.len() + 1..])
        }
        None => (None, name),
    };

    let Some(after_slashes) = after_scheme.strip_prefix("//") else {
        return Ok(AuthorityPrefix {
            scheme,
            host: None,
            rest: after_scheme,
        });
    };
    let host_end = after_slashes.find('/').unwrap_or(after_slashes.len());
    Ok(AuthorityPrefix {
        scheme,
        host: Some(&after_slashes[..host_end]),
        rest: &after_slashes[host_end..],
    })
}

/// A validated authority name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AuthorityName {
    /// The scheme as written, or `pds` for the implicit form.
    pub scheme: Scheme,
    /// Always `localhost`.
    pub host: String,
}

impl Named for AuthorityName {
    fn full_name(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    fn normalized_name(&self) -> String {
        format!("//{}", self.host)
    }

    fn short_name(&self) -> String {
        self.host.clone()
    }
}

/// Validates authority names such as `pds-csv://localhost`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorityNameValidator;

impl AuthorityNameValidator {
    fn parse(name: &str) -> Result<AuthorityName, &'static str> {
        let prefix = split_authority(name)?;
        let host = prefix.host.ok_or("missing '//' authority")?;
        if host.is_empty() {
            return Err("missing host");
        }
        if host != LOCALHOST {
            return Err("unrecognized host");
        }
        if !prefix.rest.is_empty() {
            return Err("unexpected text after host");
        }
        Ok(AuthorityName {
            scheme: prefix.scheme.unwrap_or(DEFAULT_SCHEME),
            host: host.to_owned(),
        })
    }
}

impl NameValidator for AuthorityNameValidator {
    type Parsed = AuthorityName;

    fn kind(&self) -> NameKind {
        NameKind::Authority
    }

    fn validate(&self, name: &str) -> Result<AuthorityName, InvalidName> {
        Self::parse(name).map_err(|reason| reject(NameKind::Authority, name, reason))
    }
}
