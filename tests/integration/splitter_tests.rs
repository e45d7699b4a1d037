//! Integration tests for the SC2155 declaration splitter

use script_hygiene::splitter::{fix_file, split_line, Mode, Rewrite};
use std::fs;
use tempfile::TempDir;

fn split(line: &str) -> Vec<String> {
    split_line(line)
}

// ============================================================================
// Split forms
// ============================================================================

#[test]
fn test_local_becomes_declaration_then_assignment() {
    assert_eq!(split("local x=$(cmd)"), vec!["local x", "x=$(cmd)"]);
    assert_eq!(split("  local x=$(cmd)"), vec!["  local x", "  x=$(cmd)"]);
}

#[test]
fn test_export_becomes_assignment_then_export() {
    assert_eq!(split("export Y=$(cmd)"), vec!["Y=$(cmd)", "export Y"]);
    assert_eq!(
        split("\texport GIT_SHA=`git rev-parse HEAD`"),
        vec!["\tGIT_SHA=`git rev-parse HEAD`", "\texport GIT_SHA"]
    );
}

#[test]
fn test_declare_with_options() {
    assert_eq!(
        split("declare -g -i total=$(count_items)"),
        vec!["declare -g -i total", "total=$(count_items)"]
    );
}

#[test]
fn test_trailing_content_kept_in_assignment() {
    assert_eq!(
        split("local name=$(whoami) # current user"),
        vec!["local name", "name=$(whoami) # current user"]
    );
}

// ============================================================================
// Passthrough
// ============================================================================

#[test]
fn test_plain_assignments_unchanged() {
    for line in [
        "local x=1",
        "declare y=\"$HOME\"",
        "export PATH=/usr/bin:$PATH",
        "local z=",
    ] {
        assert_eq!(split(line), vec![line]);
    }
}

#[test]
fn test_readonly_unchanged_regardless_of_value() {
    for line in [
        "readonly CONF=$(cat conf)",
        "local -r tmp=$(mktemp)",
        "declare -r v=`date`",
        "declare -r plain=1",
    ] {
        assert_eq!(split(line), vec![line]);
    }
}

#[test]
fn test_typeset_not_handled() {
    assert_eq!(split("typeset x=$(cmd)"), vec!["typeset x=$(cmd)"]);
}

// ============================================================================
// Whole files
// ============================================================================

const SCRIPT: &str = r#"#!/usr/bin/env bash
set -euo pipefail

export REPO_ROOT=$(git rev-parse --show-toplevel)

build() {
    local target=$(uname -m)
    local -r stamp=$(date +%s)
    declare out="dist/$target"
    echo "$out $stamp"
}
"#;

const FIXED: &str = r#"#!/usr/bin/env bash
set -euo pipefail

REPO_ROOT=$(git rev-parse --show-toplevel)
export REPO_ROOT

build() {
    local target
    target=$(uname -m)
    local -r stamp=$(date +%s)
    declare out="dist/$target"
    echo "$out $stamp"
}
"#;

#[test]
fn test_rewrite_whole_script() {
    let rewrite = Rewrite::of(SCRIPT);
    assert!(rewrite.is_modified());
    assert_eq!(rewrite.rewritten, FIXED);
}

#[test]
fn test_rewrite_fixed_script_is_noop() {
    let rewrite = Rewrite::of(FIXED);
    assert!(!rewrite.is_modified());
    assert_eq!(rewrite.rewritten, FIXED);
}

#[test]
fn test_dry_run_then_apply() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("build.sh");
    fs::write(&path, SCRIPT).unwrap();

    let dry = fix_file(&path, Mode::DryRun).unwrap();
    let diff = dry.diff.expect("diff expected");
    assert!(diff.contains("+export REPO_ROOT"));
    assert!(!dry.applied);
    assert_eq!(fs::read_to_string(&path).unwrap(), SCRIPT);

    let applied = fix_file(&path, Mode::Apply).unwrap();
    assert!(applied.applied);
    assert_eq!(fs::read_to_string(&path).unwrap(), FIXED);

    let again = fix_file(&path, Mode::Apply).unwrap();
    assert!(!again.is_modified());
    assert!(!again.applied);
}

#[test]
fn test_non_utf8_script_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.sh");
    fs::write(&path, b"echo \xe9\n").unwrap();

    assert!(fix_file(&path, Mode::DryRun).is_err());
}
