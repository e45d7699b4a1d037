//! Whole-file SC2155 rewriting with unified diff reporting

use std::fs;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use super::declaration::split_line;
use crate::error::{Error, Result};

/// Whether fixes are written back to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Only report the diff
    #[default]
    DryRun,

    /// Report the diff and overwrite the file
    Apply,
}

/// Result of rewriting a whole script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub original: String,
    pub rewritten: String,
    modified: bool,
}

impl Rewrite {
    /// Apply the per-line split to every line of `source`, in order
    pub fn of(source: &str) -> Self {
        let mut rewritten = String::with_capacity(source.len());
        let mut modified = false;

        for chunk in source.split_inclusive('\n') {
            let terminator = if chunk.ends_with("\r\n") {
                "\r\n"
            } else if chunk.ends_with('\n') {
                "\n"
            } else {
                ""
            };
            let body = &chunk[..chunk.len() - terminator.len()];

            let fixed = split_line(body);
            if fixed.len() > 1 || fixed[0] != body {
                modified = true;
            }

            let last = fixed.len() - 1;
            for (i, line) in fixed.iter().enumerate() {
                rewritten.push_str(line);
                if i < last && terminator.is_empty() {
                    rewritten.push('\n');
                } else {
                    rewritten.push_str(terminator);
                }
            }
        }

        Self {
            original: source.to_string(),
            rewritten,
            modified,
        }
    }

    /// Whether any line was split or changed
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Unified line diff labelled `a/<label>` / `b/<label>`
    pub fn unified_diff(&self, label: &str) -> String {
        let diff = TextDiff::from_lines(&self.original, &self.rewritten);
        diff.unified_diff()
            .header(&format!("a/{}", label), &format!("b/{}", label))
            .to_string()
    }
}

/// Outcome of processing one file
#[derive(Debug, Clone)]
pub struct FileFix {
    pub path: PathBuf,

    /// Unified diff, present only when the file needs fixes
    pub diff: Option<String>,

    /// Whether the rewritten content was written back
    pub applied: bool,
}

impl FileFix {
    pub fn is_modified(&self) -> bool {
        self.diff.is_some()
    }
}

/// Rewrite a script on disk, honoring the dry-run/apply mode
pub fn fix_file(path: &Path, mode: Mode) -> Result<FileFix> {
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let rewrite = Rewrite::of(&source);

    if !rewrite.is_modified() {
        tracing::debug!(path = %path.display(), "no SC2155 candidates");
        return Ok(FileFix {
            path: path.to_path_buf(),
            diff: None,
            applied: false,
        });
    }

    let diff = rewrite.unified_diff(&path.display().to_string());

    let applied = mode == Mode::Apply;
    if applied {
        fs::write(path, &rewrite.rewritten).map_err(|e| Error::io(path, e))?;
    }

    Ok(FileFix {
        path: path.to_path_buf(),
        diff: Some(diff),
        applied,
    })
}
