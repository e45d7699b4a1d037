//! Integration tests for the Unicode safety scanner

use script_hygiene::{Classifier, Config, Report, Scanner, Severity, Status};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn run(paths: &[PathBuf], warn_docs: bool) -> Report {
    let mut report = Report::new(warn_docs, 220);
    Scanner::default().scan_all(paths, &mut report);
    report
}

// ============================================================================
// Severity policy
// ============================================================================

#[test]
fn test_dockerfile_bidi_override() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "Dockerfile", "FROM scratch\n# \u{202E}gnirts\n".as_bytes());

    let report = run(&[path.clone()], false);
    assert_eq!(report.findings().len(), 1);

    let finding = &report.findings()[0];
    assert_eq!(finding.path, path);
    assert_eq!(finding.issue.severity, Severity::Error);
    assert_eq!((finding.issue.line, finding.issue.column), (2, 3));
    assert_eq!(report.status(), Status::Failed);
}

#[test]
fn test_markdown_zero_width_space() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "README.md", "family: 👨\u{200D}👩\u{200B}\n".as_bytes());

    let hidden = run(&[path.clone()], false);
    assert_eq!(hidden.findings().len(), 2);
    assert_eq!(hidden.visible().count(), 0);
    assert_eq!(hidden.status(), Status::Ok);

    let shown = run(&[path], true);
    assert_eq!(shown.visible().count(), 2);
    assert!(shown.visible().all(|f| f.issue.severity == Severity::Warn));
    assert_eq!(shown.status(), Status::WarningsOnly);
    assert_eq!(shown.status().exit_code(), 0);
}

#[test]
fn test_yaml_narrow_nbsp_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, ".github/workflows/ci.yml", "on:\u{202F}push\n".as_bytes());

    let report = run(&[path], false);
    assert_eq!(report.status(), Status::Failed);
    assert_eq!(report.status().exit_code(), 1);
}

#[test]
fn test_extensionless_file_treated_strictly() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "Makefile", "all:\n\techo\u{00A0}hi\n".as_bytes());

    let report = run(&[path], false);
    assert!(report.has_errors());
}

// ============================================================================
// Reading policy
// ============================================================================

#[test]
fn test_empty_target_set_ok() {
    let report = run(&[], false);
    assert!(report.findings().is_empty());
    assert_eq!(report.status(), Status::Ok);
}

#[test]
fn test_binary_file_skipped() {
    let dir = TempDir::new().unwrap();
    let mut content = b"\x7fELF\x00".to_vec();
    content.extend("\u{202E}".as_bytes());
    let path = write(&dir, "tool.sh", &content);

    assert_eq!(run(&[path], false).status(), Status::Ok);
}

#[test]
fn test_invalid_utf8_scanned_best_effort() {
    let dir = TempDir::new().unwrap();
    let mut content = b"name=\xc3(\n".to_vec();
    content.extend("x=\u{2066}y\n".as_bytes());
    let path = write(&dir, "vars.env", &content);

    let report = run(&[path], false);
    assert_eq!(report.findings().len(), 1);
    assert_eq!(report.findings()[0].issue.line, 2);
}

#[test]
fn test_missing_and_directory_targets_ignored() {
    let dir = TempDir::new().unwrap();
    let report = run(
        &[dir.path().to_path_buf(), dir.path().join("nope.sh")],
        false,
    );
    assert!(report.findings().is_empty());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_configured_strict_path() {
    let config: Config = toml::from_str("[scan]\nstrict_paths = [\"notes/hosts.txt\"]\n").unwrap();
    let classifier = config.classifier();
    assert!(classifier.is_strict(Path::new("notes/hosts.txt")));

    let scanner = Scanner::new(classifier);
    let issues = scanner.scan_text("a\u{200B}", Path::new("notes/hosts.txt"));
    assert_eq!(issues[0].severity, Severity::Error);

    let issues = scanner.scan_text("a\u{200B}", Path::new("notes/other.txt"));
    assert_eq!(issues[0].severity, Severity::Warn);
}

#[test]
fn test_default_classifier_allowlist() {
    let classifier = Classifier::default();
    assert!(classifier.is_strict(Path::new("build/allowlist")));
}
