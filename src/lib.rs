//! script-hygiene - Repository hygiene tools for shell scripts and source text
//!
//! Two independent tools share this library:
//!
//! - **SC2155 splitter** (`fix-sc2155`): splits `local`/`declare`/`export`
//!   assignments with command substitutions into a declaration plus a separate
//!   assignment, so the substituted command's exit status is not masked.
//! - **Unicode safety scan** (`unicode-safety-scan`): reports bidi control
//!   characters everywhere and hidden/whitespace look-alikes in strict files.
//!
//! # Example
//!
//! ```
//! use script_hygiene::splitter::split_line;
//! use script_hygiene::Scanner;
//! use std::path::Path;
//!
//! assert_eq!(split_line("local x=$(cmd)"), vec!["local x", "x=$(cmd)"]);
//!
//! let issues = Scanner::default().scan_text("key:\u{202F}value", Path::new("ci.yml"));
//! assert!(issues[0].is_error());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod splitter;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use output::{Report, Status};
pub use rules::filetypes::{is_docs_file, is_strict_file, Classifier, FileClass, Severity};
pub use scanner::{Issue, Scanner, Targets};
pub use splitter::{fix_file, split_line, Mode};
