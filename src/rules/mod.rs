//! Static classification tables for the Unicode safety scan
//!
//! Defines the forbidden code point sets and the file type policy buckets.

pub mod codepoints;
pub mod filetypes;

/// A listed code point with its Unicode metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePoint {
    /// Scalar value
    pub value: u32,

    /// Unicode character name
    pub name: &'static str,

    /// Two-letter general category (`Cf`, `Zs`, `Mn`)
    pub category: &'static str,
}

impl CodePoint {
    /// Create a new table entry
    pub const fn new(value: u32, name: &'static str, category: &'static str) -> Self {
        Self {
            value,
            name,
            category,
        }
    }
}
