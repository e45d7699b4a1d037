//! Forbidden and suspicious code point sets
//!
//! Bidi controls are forbidden everywhere (Trojan Source). Hidden format
//! characters and unusual whitespace together form the STRICT set, whose
//! severity depends on the file type.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::rules::CodePoint;

/// Bidirectional control characters
pub const BIDI_CODEPOINTS: &[CodePoint] = &[
    CodePoint::new(0x061C, "ARABIC LETTER MARK", "Cf"),
    CodePoint::new(0x200E, "LEFT-TO-RIGHT MARK", "Cf"),
    CodePoint::new(0x200F, "RIGHT-TO-LEFT MARK", "Cf"),
    CodePoint::new(0x202A, "LEFT-TO-RIGHT EMBEDDING", "Cf"),
    CodePoint::new(0x202B, "RIGHT-TO-LEFT EMBEDDING", "Cf"),
    CodePoint::new(0x202C, "POP DIRECTIONAL FORMATTING", "Cf"),
    CodePoint::new(0x202D, "LEFT-TO-RIGHT OVERRIDE", "Cf"),
    CodePoint::new(0x202E, "RIGHT-TO-LEFT OVERRIDE", "Cf"),
    CodePoint::new(0x2066, "LEFT-TO-RIGHT ISOLATE", "Cf"),
    CodePoint::new(0x2067, "RIGHT-TO-LEFT ISOLATE", "Cf"),
    CodePoint::new(0x2068, "FIRST STRONG ISOLATE", "Cf"),
    CodePoint::new(0x2069, "POP DIRECTIONAL ISOLATE", "Cf"),
];

/// Zero-width and other invisible formatting characters
pub const HIDDEN_FORMAT_CODEPOINTS: &[CodePoint] = &[
    CodePoint::new(0x00AD, "SOFT HYPHEN", "Cf"),
    CodePoint::new(0x034F, "COMBINING GRAPHEME JOINER", "Mn"),
    CodePoint::new(0x200B, "ZERO WIDTH SPACE", "Cf"),
    CodePoint::new(0x200C, "ZERO WIDTH NON-JOINER", "Cf"),
    // emoji joiner, common in prose
    CodePoint::new(0x200D, "ZERO WIDTH JOINER", "Cf"),
    CodePoint::new(0x2060, "WORD JOINER", "Cf"),
    CodePoint::new(0xFEFF, "ZERO WIDTH NO-BREAK SPACE", "Cf"),
];

/// Whitespace that renders like an ordinary space
pub const SNEAKY_WHITESPACE: &[CodePoint] = &[
    CodePoint::new(0x00A0, "NO-BREAK SPACE", "Zs"),
    CodePoint::new(0x1680, "OGHAM SPACE MARK", "Zs"),
    CodePoint::new(0x2000, "EN QUAD", "Zs"),
    CodePoint::new(0x2001, "EM QUAD", "Zs"),
    CodePoint::new(0x2002, "EN SPACE", "Zs"),
    CodePoint::new(0x2003, "EM SPACE", "Zs"),
    CodePoint::new(0x2004, "THREE-PER-EM SPACE", "Zs"),
    CodePoint::new(0x2005, "FOUR-PER-EM SPACE", "Zs"),
    CodePoint::new(0x2006, "SIX-PER-EM SPACE", "Zs"),
    CodePoint::new(0x2007, "FIGURE SPACE", "Zs"),
    CodePoint::new(0x2008, "PUNCTUATION SPACE", "Zs"),
    CodePoint::new(0x2009, "THIN SPACE", "Zs"),
    CodePoint::new(0x200A, "HAIR SPACE", "Zs"),
    CodePoint::new(0x202F, "NARROW NO-BREAK SPACE", "Zs"),
    CodePoint::new(0x205F, "MEDIUM MATHEMATICAL SPACE", "Zs"),
    CodePoint::new(0x3000, "IDEOGRAPHIC SPACE", "Zs"),
];

/// Which table a listed code point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePointClass {
    /// Always forbidden
    Bidi,
    HiddenFormat,
    SneakyWhitespace,
}

impl CodePointClass {
    /// Member of the STRICT set (hidden format or sneaky whitespace)
    pub fn is_strict(&self) -> bool {
        matches!(
            self,
            CodePointClass::HiddenFormat | CodePointClass::SneakyWhitespace
        )
    }
}

// Every listed code point is >= U+00A0, so ASCII and Latin-1 controls skip the map.
const LOWEST_LISTED: char = '\u{00A0}';

static INDEX: Lazy<HashMap<u32, (CodePointClass, &'static CodePoint)>> = Lazy::new(|| {
    let tables = [
        (CodePointClass::Bidi, BIDI_CODEPOINTS),
        (CodePointClass::HiddenFormat, HIDDEN_FORMAT_CODEPOINTS),
        (CodePointClass::SneakyWhitespace, SNEAKY_WHITESPACE),
    ];

    let mut index = HashMap::new();
    for (class, table) in tables {
        for cp in table {
            index.insert(cp.value, (class, cp));
        }
    }
    index
});

/// Look up a character in the code point tables
pub fn classify(c: char) -> Option<(CodePointClass, &'static CodePoint)> {
    if c < LOWEST_LISTED {
        return None;
    }
    INDEX.get(&(c as u32)).copied()
}

/// Metadata for a code point, whether or not it is listed
pub fn lookup(value: u32) -> Option<&'static CodePoint> {
    INDEX.get(&value).map(|(_, cp)| *cp)
}

/// Human readable description: `U+202E RIGHT-TO-LEFT OVERRIDE (category Cf)`
pub fn describe(value: u32) -> String {
    match lookup(value) {
        Some(cp) => format!("U+{:04X} {} (category {})", value, cp.name, cp.category),
        None => format!("U+{:04X} UNKNOWN", value),
    }
}
