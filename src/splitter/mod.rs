//! SC2155 declaration splitter
//!
//! Separates `local`/`declare`/`export` declarations from command-substitution
//! assignments so the substituted command's exit status is not masked.

pub mod declaration;
pub mod rewrite;

pub use declaration::{has_command_substitution, split_line, Declaration, Keyword};
pub use rewrite::{fix_file, FileFix, Mode, Rewrite};
