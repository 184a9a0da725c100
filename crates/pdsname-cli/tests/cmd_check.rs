//! Integration tests for `pdsname check`, `explain` and `version`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `pdsname` binary.
fn pdsname_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("pdsname");
    path
}

fn pdsname(args: &[&str]) -> Output {
    Command::new(pdsname_bin())
        .args(args)
        .env_remove("PDSNAME_FORMAT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("run pdsname")
}

fn names_file(content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(content.as_bytes()).expect("write");
    f
}

#[test]
fn check_valid_names_exit_0() {
    let out = pdsname(&["check", "pds://localhost", "pds:/a/../b/file.csv"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "pds://localhost\t//localhost\tlocalhost\n\
         pds-csv://localhost/b/file.csv\t/b/file.csv\tfile.csv\n"
    );
}

#[test]
fn check_invalid_name_exit_1() {
    let out = pdsname(&["check", "pds:/a/file.csv", "pds://host/file.csv"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[E] device \"pds://host/file.csv\": unrecognized host"), "{stderr}");
    assert!(stderr.contains("1 valid, 1 invalid"), "{stderr}");
    assert!(stderr.contains("error: 1 of 2 names rejected"), "{stderr}");
}

#[test]
fn check_without_names_exit_2() {
    let out = pdsname(&["check"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no names given"), "{stderr}");
}

#[test]
fn check_reads_names_file() {
    let f = names_file("# devices\npds:/one.csv\n\npds-xls:/two\n");
    let out = pdsname(&["check", "--file", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("pds-xls://localhost/two\t/two\ttwo"), "{stdout}");
}

#[test]
fn check_reads_stdin() {
    let mut child = Command::new(pdsname_bin())
        .args(["check", "--file", "-", "--format", "json"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn pdsname");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"pds:/f.csv::[\"a\"]\n")
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let first: serde_json::Value =
        serde_json::from_str(stdout.lines().next().expect("record")).expect("json");
    assert_eq!(first["kind"], "attribute");
    assert_eq!(first["short"], "[\"a\"]");
}

#[test]
fn check_missing_file_exit_2() {
    let out = pdsname(&["check", "--file", "/no/such/names.txt"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("file not found"), "{stderr}");
}

#[test]
fn check_oversized_file_exit_2() {
    let f = names_file("pds:/one.csv\npds:/two.csv\n");
    let out = pdsname(&[
        "check",
        "--max-file-size",
        "4",
        "--file",
        f.path().to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("file too large"), "{stderr}");
}

#[test]
fn check_quiet_prints_nothing_for_valid_names() {
    let out = pdsname(&["check", "-q", "pds:/a.csv"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
}

#[test]
fn explain_json() {
    let out = pdsname(&["explain", "pds:/C:/data/../f.xls", "-f", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["kind"], "device");
    assert_eq!(v["parsed"]["format"], "xls");
    assert_eq!(v["names"]["normalized"], "/C:/f.xls");
}

#[test]
fn explain_invalid_exit_1() {
    let out = pdsname(&["explain", "--kind", "authority", "pds:/a.csv"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[E] authority"), "{stderr}");
}

#[test]
fn no_color_env_with_any_value_is_accepted() {
    for value in ["1", "yes", ""] {
        let out = Command::new(pdsname_bin())
            .args(["check", "pds:/a.csv"])
            .env_remove("PDSNAME_FORMAT")
            .env("NO_COLOR", value)
            .output()
            .expect("run pdsname");
        assert_eq!(out.status.code(), Some(0), "NO_COLOR={value:?}");
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(!stderr.contains("invalid value"), "{stderr}");
    }
}

#[test]
fn no_color_flag_is_accepted() {
    let out = pdsname(&["check", "--no-color", "pds:/a.csv"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn version_prints_semver() {
    let out = pdsname(&["version"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim().split('.').count(), 3);
}
