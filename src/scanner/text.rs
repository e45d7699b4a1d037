//! Lossless text decoding and line splitting
//!
//! Invalid UTF-8 is not rejected: each undecodable byte becomes a raw unit so
//! the rest of the file is still scanned character by character.

use std::fmt::Write as _;

/// One decoded position in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Char(char),
    /// A byte that is not part of any valid UTF-8 sequence
    Byte(u8),
}

impl Unit {
    pub fn as_char(&self) -> Option<char> {
        match self {
            Unit::Char(c) => Some(*c),
            Unit::Byte(_) => None,
        }
    }
}

/// Decode bytes, keeping invalid sequences as raw bytes
pub fn decode_lossless(bytes: &[u8]) -> Vec<Unit> {
    let mut units = Vec::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        units.extend(chunk.valid().chars().map(Unit::Char));
        units.extend(chunk.invalid().iter().copied().map(Unit::Byte));
    }
    units
}

/// Whether a character ends a line (universal line boundaries)
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split decoded text into lines, excluding terminators.
///
/// `\r\n` counts as one break. A trailing break does not open an empty line.
pub fn split_lines(units: &[Unit]) -> Vec<&[Unit]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < units.len() {
        match units[i].as_char() {
            Some(c) if is_line_break(c) => {
                lines.push(&units[start..i]);
                if c == '\r' && units.get(i + 1) == Some(&Unit::Char('\n')) {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < units.len() {
        lines.push(&units[start..]);
    }
    lines
}

/// Render units for display, escaping raw bytes as `\xNN`
pub fn render(units: &[Unit]) -> String {
    let mut out = String::with_capacity(units.len());
    for unit in units {
        match unit {
            Unit::Char(c) => out.push(*c),
            Unit::Byte(b) => {
                let _ = write!(out, "\\x{:02x}", b);
            }
        }
    }
    out
}
