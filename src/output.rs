//! Report formatting for the Unicode safety scan
//!
//! Renders findings as the two-line text report or as a JSON document, and
//! derives the overall status and exit code.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::rules::filetypes::Severity;
use crate::scanner::Issue;

/// Default snippet truncation length, in characters
pub const DEFAULT_SNIPPET_LIMIT: usize = 220;

const ELLIPSIS: char = '…';

/// An issue together with the file it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    pub issue: Issue,
}

/// Overall outcome of a scan run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No issues shown
    Ok,

    /// Only docs warnings were shown
    WarningsOnly,

    /// At least one ERROR
    Failed,
}

impl Status {
    pub fn exit_code(&self) -> i32 {
        match self {
            Status::Failed => 1,
            Status::Ok | Status::WarningsOnly => 0,
        }
    }
}

/// Accumulated findings of one scan run
#[derive(Debug, Clone)]
pub struct Report {
    findings: Vec<Finding>,
    warn_docs: bool,
    snippet_limit: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self::new(false, DEFAULT_SNIPPET_LIMIT)
    }
}

impl Report {
    /// Create an empty report; WARN findings are only shown with `warn_docs`
    pub fn new(warn_docs: bool, snippet_limit: usize) -> Self {
        Self {
            findings: Vec::new(),
            warn_docs,
            snippet_limit,
        }
    }

    /// Record the issues of one file
    pub fn extend(&mut self, path: &Path, issues: Vec<Issue>) {
        self.findings.extend(issues.into_iter().map(|issue| Finding {
            path: path.to_path_buf(),
            issue,
        }));
    }

    /// Every finding, including suppressed warnings
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings that will be printed
    pub fn visible(&self) -> impl Iterator<Item = &Finding> {
        let warn_docs = self.warn_docs;
        self.findings
            .iter()
            .filter(move |f| f.issue.severity == Severity::Error || warn_docs)
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.issue.is_error())
    }

    pub fn has_visible_warnings(&self) -> bool {
        self.visible().any(|f| f.issue.severity == Severity::Warn)
    }

    pub fn status(&self) -> Status {
        if self.has_errors() {
            Status::Failed
        } else if self.has_visible_warnings() {
            Status::WarningsOnly
        } else {
            Status::Ok
        }
    }

    /// Write the two-line text form of every visible finding
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for finding in self.visible() {
            let issue = &finding.issue;
            writeln!(
                out,
                "{}: {}:{}:{}: {}",
                issue.severity,
                finding.path.display(),
                issue.line,
                issue.column,
                issue.describe()
            )?;
            writeln!(
                out,
                "  ↳ {}",
                truncate_snippet(&issue.line_text, self.snippet_limit)
            )?;
        }
        Ok(())
    }

    /// Serialize visible findings as `{ "ok": bool, "issues": [...] }`
    pub fn to_json(&self) -> String {
        let issues: Vec<JsonIssue> = self
            .visible()
            .map(|f| JsonIssue {
                severity: f.issue.severity,
                path: f.path.to_string_lossy().into_owned(),
                line: f.issue.line,
                column: f.issue.column,
                code_point: format!("U+{:04X}", f.issue.code_point),
                description: f.issue.describe(),
                snippet: truncate_snippet(&f.issue.line_text, self.snippet_limit),
            })
            .collect();

        let doc = JsonReport {
            ok: !self.has_errors(),
            issues,
        };
        serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
struct JsonReport {
    ok: bool,
    issues: Vec<JsonIssue>,
}

#[derive(Serialize)]
struct JsonIssue {
    severity: Severity,
    path: String,
    line: usize,
    column: usize,
    code_point: String,
    description: String,
    snippet: String,
}

/// Truncate to `limit` characters, marking the cut with an ellipsis
pub fn truncate_snippet(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => {
            let mut out = text[..idx].to_string();
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}
