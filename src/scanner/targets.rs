//! Scan target selection
//!
//! Either an explicit path list or every file tracked by git.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

/// Where the files to scan come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Targets {
    Explicit(Vec<PathBuf>),
    /// `git ls-files` in the working directory
    Tracked,
}

impl Targets {
    /// Explicit paths when any are given, otherwise the tracked file set
    pub fn from_args(paths: Vec<PathBuf>) -> Self {
        if paths.is_empty() {
            Targets::Tracked
        } else {
            Targets::Explicit(paths)
        }
    }

    pub fn resolve(self) -> Result<Vec<PathBuf>> {
        match self {
            Targets::Explicit(paths) => Ok(paths),
            Targets::Tracked => git_ls_files(),
        }
    }
}

/// List tracked files via `git ls-files -z`
///
/// The NUL-separated listing keeps names verbatim. Plain `git ls-files`
/// quotes names with non-ASCII bytes, which would not resolve on disk.
pub fn git_ls_files() -> Result<Vec<PathBuf>> {
    let output = Command::new("git")
        .args(["ls-files", "-z"])
        .output()
        .map_err(|e| Error::GitListing(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitListing(format!(
            "{} ({})",
            stderr.trim(),
            output.status
        )));
    }

    Ok(parse_listing(&output.stdout))
}

fn parse_listing(listing: &[u8]) -> Vec<PathBuf> {
    listing
        .split(|&b| b == b'\0')
        .filter(|entry| !entry.is_empty())
        .map(path_from_bytes)
        .collect()
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
