//! Grammar of the attribute selector, the text after `::`.
//!
//! ```text
//! selector := [ part ( "," part )* ]
//! part     := sheet | columns | options | rows      (in this order, each at most once)
//! sheet    := "..." | '...'                         (xls only; empty means the first sheet)
//! columns  := [ "name", ... ]
//! options  := { ... }                               (passed to the reader verbatim)
//! rows     := [ ] | [ start ] | [ start , end ]     (end exclusive)
//! ```
//!
//! `columns` and `options` together make up the column spec: an object may
//! stand in for the column list or follow it, and a row range may come after
//! either. A bracketed list fills the column slot when that slot is still
//! free and every element is a string, so `[]` on its own is an empty column
//! list and `[0,7]` is a row range. Parts are delimited exactly: whitespace
//! between parts, empty parts and unbalanced quotes or brackets are all
//! errors.
use serde::Serialize;
use serde_json::{Map, Value};

use crate::scheme::DataFormat;

#[cfg(test)]
mod tests;

/// Which sheet of a workbook to read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "sheet", content = "name", rename_all = "snake_case")]
pub enum SheetRef {
    /// `""` or `''`: the first sheet.
    First,
    /// A sheet by name.
    Named(String),
}

/// Half-open row interval `[start, end)`; `end == None` reads to the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RowRange {
    /// First row, inclusive.
    pub start: u64,
    /// Last row, exclusive.
    pub end: Option<u64>,
}

impl RowRange {
    /// All rows.
    pub const ALL: Self = Self {
        start: 0,
        end: None,
    };

    /// Number of rows selected, or `None` when the range is open.
    pub fn len(&self) -> Option<u64> {
        self.end.map(|end| end.saturating_sub(self.start))
    }

    /// Returns `true` for a closed range that selects no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Returns `true` if `row` falls inside the range.
    pub fn contains(&self, row: u64) -> bool {
        row >= self.start && self.end.is_none_or(|end| row < end)
    }

    fn from_bounds(bounds: &[Value]) -> Result<Self, &'static str> {
        let mut numbers = Vec::with_capacity(bounds.len());
        for bound in bounds {
            numbers.push(
                bound
                    .as_u64()
                    .ok_or("row range must hold non-negative integers")?,
            );
        }
        match numbers.as_slice() {
            [] => Ok(Self::ALL),
            [start] => Ok(Self {
                start: *start,
                end: None,
            }),
            [start, end] if start <= end => Ok(Self {
                start: *start,
                end: Some(*end),
            }),
            [_, _] => Err("row range end precedes its start"),
            _ => Err("row range holds at most two bounds"),
        }
    }
}

/// The parsed parts of a selector. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selector {
    /// Sheet to read (xls only).
    pub sheet: Option<SheetRef>,
    /// Columns to read; `Some(vec![])` and `None` both mean all columns.
    pub columns: Option<Vec<String>>,
    /// Rows to read.
    pub rows: Option<RowRange>,
    /// Extra keyword arguments for the reader, e.g. `{"usecols":["a"]}`.
    pub options: Option<Map<String, Value>>,
}

/// Position of a part in the fixed selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Sheet,
    Columns,
    Options,
    Rows,
}

impl Selector {
    /// Parses selector `text` for a device of the given `format`.
    ///
    /// # Errors
    ///
    /// Returns a short reason when `text` does not follow the selector
    /// grammar or names a sheet for a csv device.
    pub fn parse(text: &str, format: DataFormat) -> Result<Self, &'static str> {
        let mut selector = Self::default();
        if text.is_empty() {
            return Ok(selector);
        }

        let mut filled = None;
        let mut rest = text;
        loop {
            let (part, tail) = next_part(rest)?;
            filled = Some(selector.assign(part, filled, format)?);
            if tail.is_empty() {
                return Ok(selector);
            }
            rest = tail
                .strip_prefix(',')
                .ok_or("unexpected text after selector part")?;
        }
    }

    /// Returns `true` when no part is present (select everything).
    pub fn is_empty(&self) -> bool {
        self.sheet.is_none() && self.columns.is_none() && self.rows.is_none() && self.options.is_none()
    }

    /// Stores `part` in the first free slot that accepts it.
    fn assign(
        &mut self,
        part: &str,
        filled: Option<Slot>,
        format: DataFormat,
    ) -> Result<Slot, &'static str> {
        let free = |slot: Slot| filled.is_none_or(|last| slot > last);

        match part.chars().next() {
            Some('"' | '\'') => {
                if !free(Slot::Sheet) {
                    return Err("sheet must be the first selector part");
                }
                if format != DataFormat::Xls {
                    return Err("sheet selection requires the xls format");
                }
                let name = unquote(part)?;
                self.sheet = Some(if name.is_empty() {
                    SheetRef::First
                } else {
                    SheetRef::Named(name)
                });
                Ok(Slot::Sheet)
            }
            Some('[') => {
                let items: Vec<Value> =
                    serde_json::from_str(part).map_err(|_| "malformed list in selector")?;
                if free(Slot::Columns) && items.iter().all(Value::is_string) {
                    self.columns = Some(
                        items
                            .iter()
                            .filter_map(|v| v.as_str().map(str::to_owned))
                            .collect(),
                    );
                    Ok(Slot::Columns)
                } else if free(Slot::Rows) {
                    self.rows = Some(RowRange::from_bounds(&items)?);
                    Ok(Slot::Rows)
                } else {
                    Err("selector parts out of order")
                }
            }
            Some('{') => {
                if self.options.is_some() {
                    return Err("reader options given twice");
                }
                if !free(Slot::Options) {
                    return Err("selector parts out of order");
                }
                let options: Map<String, Value> =
                    serde_json::from_str(part).map_err(|_| "malformed reader options")?;
                self.options = Some(options);
                Ok(Slot::Options)
            }
            Some(_) | None => Err("unexpected character in selector"),
        }
    }
}

/// Splits the leading part off `text`, returning `(part, remainder)`.
///
/// Only finds the extent of the part; its content is checked by
/// [`Selector::assign`].
fn next_part(text: &str) -> Result<(&str, &str), &'static str> {
    let end = match text.chars().next() {
        None | Some(',') => return Err("empty selector part"),
        Some('"') => end_of_string(text, 1)?,
        Some('\'') => text[1..]
            .find('\'')
            .map(|i| i + 2)
            .ok_or("unterminated string in selector")?,
        Some('[' | '{') => end_of_brackets(text)?,
        Some(_) => return Err("unexpected character in selector"),
    };
    Ok(text.split_at(end))
}

/// Returns the index just past the `"` closing a string whose body starts at
/// `from`. Backslash escapes are skipped.
fn end_of_string(text: &str, from: usize) -> Result<usize, &'static str> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Ok(i + 1),
            _ => i += 1,
        }
    }
    Err("unterminated string in selector")
}

/// Returns the index just past the bracket closing the one at index 0.
fn end_of_brackets(text: &str) -> Result<usize, &'static str> {
    let bytes = text.as_bytes();
    let mut open: Vec<u8> = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = end_of_string(text, i + 1)?;
                continue;
            }
            b @ (b'[' | b'{') => open.push(b),
            b @ (b']' | b'}') => {
                let expected = match open.pop() {
                    Some(b'[') => b']',
                    Some(_) => b'}',
                    None => return Err("unbalanced brackets in selector"),
                };
                if b != expected {
                    return Err("mismatched brackets in selector");
                }
                if open.is_empty() {
                    return Ok(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    Err("unbalanced brackets in selector")
}

/// Returns the content of a quoted sheet name.
///
/// Double-quoted names follow JSON string rules; single-quoted names are
/// taken literally.
fn unquote(part: &str) -> Result<String, &'static str> {
    if part.starts_with('"') {
        serde_json::from_str::<String>(part).map_err(|_| "malformed sheet name")
    } else {
        Ok(part[1..part.len() - 1].to_owned())
    }
}
