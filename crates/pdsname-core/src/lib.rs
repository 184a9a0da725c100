//! Validation and normalization of pandas data-source names.
//!
//! Three validators compose hierarchically: an attribute name
//! (`pds:/path/to/file.csv::["col"]`) contains a device name
//! (`pds:/path/to/file.csv`), whose prefix is an authority
//! (`pds://localhost`). Each validator produces the canonical full name, a
//! normalized name and a short display name, or a single [`InvalidName`]
//! error.
//!
//! ```
//! use pdsname_core::{DeviceNameValidator, NameValidator};
//!
//! let names = DeviceNameValidator.names("pds:/a/../c/file.csv")?;
//! assert_eq!(names.full, "pds-csv://localhost/c/file.csv");
//! assert_eq!(names.normalized, "/c/file.csv");
//! assert_eq!(names.short, "file.csv");
//! # Ok::<(), pdsname_core::InvalidName>(())
//! ```
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod attribute;
pub mod authority;
pub mod device;
pub mod error;
pub mod kind;
pub mod path;
pub mod scheme;
pub mod selector;
pub mod validator;

pub use attribute::{AttributeName, AttributeNameValidator, SELECTOR_SEPARATOR};
pub use authority::{AuthorityName, AuthorityNameValidator};
pub use device::{DeviceName, DeviceNameValidator};
pub use error::InvalidName;
pub use kind::NameKind;
pub use path::ResolvedPath;
pub use scheme::{DEFAULT_SCHEME, DataFormat, LOCALHOST, Scheme};
pub use selector::{RowRange, Selector, SheetRef};
pub use validator::{NameValidator, Named, Names, validate_names};

/// Returns the current version of the pdsname-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
