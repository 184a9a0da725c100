//! Attribute tier: `<device>::<selector>`.
use serde::Serialize;

use crate::device::{DeviceName, DeviceNameValidator};
use crate::error::InvalidName;
use crate::kind::NameKind;
use crate::selector::Selector;
use crate::validator::{NameValidator, Named, reject};

/// Separator between the device part and the selector.
pub const SELECTOR_SEPARATOR: &str = "::";

/// A validated attribute name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeName {
    /// The device the selector applies to.
    pub device: DeviceName,
    /// The parsed selector.
    pub selector: Selector,
    /// The selector exactly as written; reused verbatim in every rendering.
    pub selector_text: String,
}

impl Named for AttributeName {
    fn full_name(&self) -> String {
        format!(
            "{}{SELECTOR_SEPARATOR}{}",
            self.device.full_name(),
            self.selector_text
        )
    }

    fn normalized_name(&self) -> String {
        format!(
            "{}{SELECTOR_SEPARATOR}{}",
            self.device.normalized_name(),
            self.selector_text
        )
    }

    fn short_name(&self) -> String {
        self.selector_text.clone()
    }
}

/// Validates attribute names such as `pds-xls:/path/to/file::"Sheet",[],[0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeNameValidator;

impl AttributeNameValidator {
    fn parse(name: &str) -> Result<AttributeName, &'static str> {
        let (device_text, selector_text) = name
            .split_once(SELECTOR_SEPARATOR)
            .ok_or("missing '::' before the selector")?;
        let device = DeviceNameValidator::parse(device_text)?;
        let selector = Selector::parse(selector_text, device.format)?;
        Ok(AttributeName {
            device,
            selector,
            selector_text: selector_text.to_owned(),
        })
    }
}

impl NameValidator for AttributeNameValidator {
    type Parsed = AttributeName;

    fn kind(&self) -> NameKind {
        NameKind::Attribute
    }

    fn validate(&self, name: &str) -> Result<AttributeName, InvalidName> {
        Self::parse(name).map_err(|reason| reject(NameKind::Attribute, name, reason))
    }
}
