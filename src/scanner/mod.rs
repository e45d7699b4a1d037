//! Unicode safety scanner
//!
//! Reads each target file, classifies it by path and reports every bidi
//! control or STRICT-set character it contains.

pub mod targets;
pub mod text;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::output::Report;
use crate::rules::codepoints;
use crate::rules::filetypes::{Classifier, FileClass, Severity};
use text::{decode_lossless, render, split_lines, Unit};

pub use targets::Targets;

/// A single offending character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,

    /// 1-based line number
    pub line: usize,

    /// 1-based column, counted in characters
    pub column: usize,

    pub code_point: u32,

    /// The whole offending line, terminator excluded
    pub line_text: String,
}

impl Issue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `U+XXXX NAME (category Xx)`
    pub fn describe(&self) -> String {
        codepoints::describe(self.code_point)
    }
}

/// Scan decoded text as a file of the given class
pub fn scan_units(units: &[Unit], class: FileClass) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (line_idx, line) in split_lines(units).into_iter().enumerate() {
        for (col_idx, unit) in line.iter().enumerate() {
            let Some((cp_class, cp)) = unit.as_char().and_then(codepoints::classify) else {
                continue;
            };
            issues.push(Issue {
                severity: class.severity(cp_class),
                line: line_idx + 1,
                column: col_idx + 1,
                code_point: cp.value,
                line_text: render(line),
            });
        }
    }

    issues
}

/// Read a file for scanning.
///
/// `Ok(None)` means the file looks binary (contains NUL) and is skipped.
pub fn read_text(path: &Path) -> std::io::Result<Option<Vec<Unit>>> {
    let data = fs::read(path)?;
    if data.contains(&0) {
        return Ok(None);
    }
    Ok(Some(decode_lossless(&data)))
}

/// File scanner bound to a path classifier
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    classifier: Classifier,
}

impl Scanner {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Scan in-memory text as though it lived at `path`
    pub fn scan_text(&self, text: &str, path: &Path) -> Vec<Issue> {
        let units: Vec<Unit> = text.chars().map(Unit::Char).collect();
        scan_units(&units, self.classifier.classify(path))
    }

    /// Scan one file; `None` when it was skipped
    pub fn scan_file(&self, path: &Path) -> Option<Vec<Issue>> {
        if !path.exists() || path.is_dir() {
            tracing::debug!(path = %path.display(), "skipping missing path or directory");
            return None;
        }

        let units = match read_text(path) {
            Ok(Some(units)) => units,
            Ok(None) => {
                tracing::debug!(path = %path.display(), "skipping binary file");
                return None;
            }
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                return None;
            }
        };

        let issues = scan_units(&units, self.classifier.classify(path));
        tracing::debug!(path = %path.display(), issues = issues.len(), "scanned");
        Some(issues)
    }

    /// Scan every path in order, accumulating findings into `report`
    pub fn scan_all(&self, paths: &[PathBuf], report: &mut Report) {
        for path in paths {
            if let Some(issues) = self.scan_file(path) {
                report.extend(path, issues);
            }
        }
    }
}
