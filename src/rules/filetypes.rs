//! File type policy buckets
//!
//! Classification depends only on the path: extension, base name, or an
//! exact match against the special-cased strict path list.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::rules::codepoints::CodePointClass;

/// Prose formats where hidden characters are tolerated
pub const DOCS_EXTENSIONS: &[&str] = &["md", "txt", "rst"];

/// Machine-parsed formats where hidden characters are never legitimate
pub const STRICT_EXTENSIONS: &[&str] = &[
    "sh",
    "bash",
    "zsh",
    "ini",
    "conf",
    "cfg",
    "env",
    "yml",
    "yaml",
    "json",
    "toml",
    "dockerfile",
];

/// Extensionless files that are always strict
pub const DEFAULT_STRICT_PATHS: &[&str] = &["build/allowlist"];

const DOCKERFILE: &str = "Dockerfile";

/// Policy bucket controlling STRICT-set severities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Strict,
    Docs,
    /// Unrecognized type, treated like strict
    Default,
}

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FileClass {
    /// Severity for a listed code point found in a file of this class
    pub fn severity(&self, class: CodePointClass) -> Severity {
        match (class, self) {
            (CodePointClass::Bidi, _) => Severity::Error,
            (_, FileClass::Docs) => Severity::Warn,
            (_, FileClass::Strict | FileClass::Default) => Severity::Error,
        }
    }
}

fn extension_in(path: &Path, set: &[&str]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| set.contains(&ext.as_str()))
}

/// Drop leading `./` components so `./build/allowlist` equals `build/allowlist`
fn normalized(path: &Path) -> PathBuf {
    path.components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect()
}

/// Whether the path is a prose document (`.md`, `.txt`, `.rst`)
pub fn is_docs_file(path: &Path) -> bool {
    extension_in(path, DOCS_EXTENSIONS)
}

/// Whether the path is strict under the default special-cased path list
pub fn is_strict_file(path: &Path) -> bool {
    Classifier::default().is_strict(path)
}

/// Path classifier with a configurable special-cased strict path list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    strict_paths: Vec<PathBuf>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_STRICT_PATHS.iter().map(PathBuf::from))
    }
}

impl Classifier {
    /// Create a classifier with the given special-cased strict paths
    pub fn new(strict_paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            strict_paths: strict_paths.into_iter().map(|p| normalized(&p)).collect(),
        }
    }

    pub fn strict_paths(&self) -> &[PathBuf] {
        &self.strict_paths
    }

    /// `Dockerfile`, a special-cased path, or a strict extension
    pub fn is_strict(&self, path: &Path) -> bool {
        if path.file_name().is_some_and(|name| name == DOCKERFILE) {
            return true;
        }
        let path = normalized(path);
        if self.strict_paths.iter().any(|p| *p == path) {
            return true;
        }
        extension_in(&path, STRICT_EXTENSIONS)
    }

    pub fn classify(&self, path: &Path) -> FileClass {
        if self.is_strict(path) {
            FileClass::Strict
        } else if is_docs_file(path) {
            FileClass::Docs
        } else {
            FileClass::Default
        }
    }
}
