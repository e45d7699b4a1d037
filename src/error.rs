//! Error types for script-hygiene

use std::path::PathBuf;

/// Errors surfaced by the splitter and the scanner
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed
    #[error("failed to parse {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// `git ls-files` could not produce a file listing
    #[error("git ls-files failed: {0}")]
    GitListing(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
