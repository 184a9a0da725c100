//! Lexical resolution of device paths.
//!
//! Paths are resolved against a virtual root without touching the
//! filesystem: repeated slashes collapse, `.` is dropped and `..` removes the
//! previous segment. A `..` at the root (or directly under a drive prefix) is
//! discarded rather than rejected. Runs of three or more dots are ordinary
//! names.
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Matches a Windows drive prefix segment such as `C:`.
static DRIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]:$").unwrap_or_else(|_| unreachable!("drive pattern is a valid regex"))
});

/// Characters that may never appear in a path segment.
const RESERVED: [char; 3] = [':', '?', '#'];

/// An absolute, fully resolved device path.
///
/// Always holds at least one segment; the last one is the file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedPath {
    drive: Option<char>,
    segments: Vec<String>,
}

impl ResolvedPath {
    /// Resolves a raw path such as `/a/../c/file.csv`.
    ///
    /// # Errors
    ///
    /// Returns a short reason when the path does not start with `/`, ends
    /// with `/`, contains whitespace or a reserved character, has a malformed
    /// drive prefix, or does not end in a file name.
    pub fn resolve(raw: &str) -> Result<Self, &'static str> {
        if !raw.starts_with('/') {
            return Err("path must start with '/'");
        }
        if raw.chars().any(char::is_whitespace) {
            return Err("whitespace in path");
        }
        if raw.ends_with('/') {
            return Err("path must not end with '/'");
        }

        let mut raw_segments = raw.split('/').filter(|s| !s.is_empty()).peekable();

        let mut drive = None;
        if let Some(&first) = raw_segments.peek() {
            if first.contains(':') {
                if !DRIVE_RE.is_match(first) {
                    return Err("drive prefix must be a single letter followed by ':'");
                }
                drive = first.chars().next();
                raw_segments.next();
            }
        }

        let mut segments: Vec<String> = Vec::new();
        let mut last = None;
        for segment in raw_segments {
            if segment.contains(RESERVED) {
                return Err("reserved character in path");
            }
            match segment {
                "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_owned()),
            }
            last = Some(segment);
        }

        match last {
            None => Err("path has no file name"),
            Some("." | "..") => Err("path must end with a file name"),
            Some(_) => Ok(Self { drive, segments }),
        }
    }

    /// The drive letter, if the path starts with one.
    pub fn drive(&self) -> Option<char> {
        self.drive
    }

    /// Resolved segments below the root (and drive), file name last.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment.
    pub fn file_name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Text after the last `.` of the file name.
    ///
    /// A file name whose only dot is its first character (`.csv`) or that
    /// ends with a dot has no extension.
    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.file_name().rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            None
        } else {
            Some(ext)
        }
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(drive) = self.drive {
            write!(f, "/{drive}:")?;
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn resolved(raw: &str) -> String {
        ResolvedPath::resolve(raw).expect("valid path").to_string()
    }

    #[test]
    fn plain_path_is_unchanged() {
        assert_eq!(resolved("/path/to/file.csv"), "/path/to/file.csv");
    }

    #[test]
    fn repeated_slashes_collapse() {
        assert_eq!(resolved("////path/to/file.csv"), "/path/to/file.csv");
        assert_eq!(resolved("/path//to/file.csv"), "/path/to/file.csv");
    }

    #[test]
    fn dot_segments_resolve() {
        assert_eq!(resolved("/a/../c/file.csv"), "/c/file.csv");
        assert_eq!(resolved("/foo/./file.csv"), "/foo/file.csv");
        assert_eq!(resolved("/a/b/../../file.csv"), "/file.csv");
    }

    #[test]
    fn parent_at_root_is_dropped() {
        assert_eq!(resolved("/../file.csv"), "/file.csv");
        assert_eq!(resolved("/../../x/../file.csv"), "/file.csv");
    }

    #[test]
    fn three_dots_are_a_name() {
        assert_eq!(resolved("/foo/.../file.csv"), "/foo/.../file.csv");
    }

    #[test]
    fn drive_prefix_is_kept_and_anchors_parent() {
        let p = ResolvedPath::resolve("/C:/Path/To/File.csv").expect("drive");
        assert_eq!(p.drive(), Some('C'));
        assert_eq!(p.to_string(), "/C:/Path/To/File.csv");
        assert_eq!(resolved("/C:/../File.csv"), "/C:/File.csv");
    }

    #[test]
    fn bad_drive_prefixes_are_rejected() {
        assert!(ResolvedPath::resolve("/1:/to/file.csv").is_err());
        assert!(ResolvedPath::resolve("/CD:/to/file.csv").is_err());
        assert!(ResolvedPath::resolve("/:/to/file.csv").is_err());
    }

    #[test]
    fn colon_outside_drive_is_rejected() {
        assert!(ResolvedPath::resolve("/path/to/file.csv::").is_err());
        assert!(ResolvedPath::resolve("/path/C:/file.csv").is_err());
    }

    #[test]
    fn shape_errors() {
        assert_eq!(
            ResolvedPath::resolve("path/file.csv"),
            Err("path must start with '/'")
        );
        assert_eq!(ResolvedPath::resolve(""), Err("path must start with '/'"));
        assert_eq!(
            ResolvedPath::resolve("/pa th/file.csv"),
            Err("whitespace in path")
        );
        assert_eq!(
            ResolvedPath::resolve("/path/file.csv/"),
            Err("path must not end with '/'")
        );
        assert_eq!(ResolvedPath::resolve("/"), Err("path must not end with '/'"));
        assert_eq!(ResolvedPath::resolve("/C:"), Err("path has no file name"));
        assert_eq!(
            ResolvedPath::resolve("/a/.."),
            Err("path must end with a file name")
        );
    }

    #[test]
    fn extension_rules() {
        let ext = |raw: &str| {
            ResolvedPath::resolve(raw)
                .expect("valid")
                .extension()
                .map(str::to_owned)
        };
        assert_eq!(ext("/f.i.l.e..csv").as_deref(), Some("csv"));
        assert_eq!(ext("/file.xlsx").as_deref(), Some("xlsx"));
        assert_eq!(ext("/file"), None);
        assert_eq!(ext("/.csv"), None);
        assert_eq!(ext("/file."), None);
    }

    #[test]
    fn file_name_is_last_segment() {
        let p = ResolvedPath::resolve("/a/b/data.csv").expect("valid");
        assert_eq!(p.file_name(), "data.csv");
        assert_eq!(p.segments(), ["a", "b", "data.csv"]);
    }
}
