//! Line-level declaration matching and SC2155 splitting
//!
//! Recognizes `local`/`declare`/`export` assignments whose value contains a
//! command substitution and rewrites them into a declaration plus a separate
//! assignment. This is best-effort pattern matching, not a shell parser:
//! nested parentheses or backticks inside a substitution are not balanced.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored structural pattern for a single-variable declaration line.
///
/// `readonly` and `typeset` are deliberately absent from the keyword group.
static DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<indent>\s*)",
        r"(?P<kw>local|declare|export)?",
        r"(?P<opts>(?:\s+-[-\w]+)*)",
        r"\s+",
        r"(?P<var>[A-Za-z_][A-Za-z0-9_]*)",
        r"\s*=\s*",
        r"(?P<val>.*)$",
    ))
    .unwrap()
});

/// `$(...)` without a nested `)`, or a backtick pair without a nested backtick
static COMMAND_SUBSTITUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\([^)]*\)|`[^`]*`").unwrap());

/// Declaration keyword preceding the variable name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Local,
    Declare,
    Export,
}

impl Keyword {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "local" => Some(Keyword::Local),
            "declare" => Some(Keyword::Declare),
            "export" => Some(Keyword::Export),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Local => "local",
            Keyword::Declare => "declare",
            Keyword::Export => "export",
        }
    }
}

/// A line decomposed into its declaration parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Leading whitespace, reused on every emitted line
    pub indent: &'a str,

    /// `None` for a bare indented assignment such as `  x=1`
    pub keyword: Option<Keyword>,

    /// Option tokens in source order (`-x`, `--word`)
    pub options: Vec<&'a str>,

    pub name: &'a str,

    /// Everything after `=` with surrounding whitespace removed on the left
    pub value: &'a str,
}

impl<'a> Declaration<'a> {
    /// Match a line against the declaration pattern
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = DECLARATION_PATTERN.captures(line)?;

        let indent = caps.name("indent").map_or("", |m| m.as_str());
        let keyword = caps.name("kw").and_then(|m| Keyword::parse(m.as_str()));
        let options = caps
            .name("opts")
            .map(|m| m.as_str().split_whitespace().collect())
            .unwrap_or_default();
        let name = caps.name("var")?.as_str();
        let value = caps.name("val").map_or("", |m| m.as_str());

        Some(Self {
            indent,
            keyword,
            options,
            name,
            value,
        })
    }

    /// Whether the declaration marks the variable readonly.
    ///
    /// A short-flag cluster containing `r` (`-r`, `-rx`, `-xr`) counts, not
    /// only a standalone `-r` token. A literal `-r` comparison (or a `-r`
    /// substring check) would split `declare -xr X=$(cmd)` into a readonly
    /// declaration followed by an assignment that fails at runtime, so
    /// clusters are left untouched as well. Long options (`--readonly`) never
    /// count.
    pub fn is_readonly(&self) -> bool {
        self.options.iter().any(|opt| {
            opt.strip_prefix('-')
                .filter(|flags| !flags.starts_with('-'))
                .is_some_and(|flags| flags.contains('r'))
        })
    }

    /// Whether the assigned value contains a command substitution
    pub fn has_command_substitution(&self) -> bool {
        has_command_substitution(self.value)
    }

    fn assignment(&self) -> String {
        format!("{}{}={}", self.indent, self.name, self.value)
    }

    /// The split form, or `None` when the line must stay as written
    pub fn split(&self) -> Option<[String; 2]> {
        if self.is_readonly() || !self.has_command_substitution() {
            return None;
        }

        match self.keyword? {
            Keyword::Export => Some([
                self.assignment(),
                format!("{}export {}", self.indent, self.name),
            ]),
            kw @ (Keyword::Local | Keyword::Declare) => {
                let declaration = if self.options.is_empty() {
                    format!("{}{} {}", self.indent, kw.as_str(), self.name)
                } else {
                    format!(
                        "{}{} {} {}",
                        self.indent,
                        kw.as_str(),
                        self.options.join(" "),
                        self.name
                    )
                };
                Some([declaration, self.assignment()])
            }
        }
    }
}

/// Detect `$(...)` or backtick command substitution in a value
pub fn has_command_substitution(value: &str) -> bool {
    COMMAND_SUBSTITUTION.is_match(value)
}

/// Rewrite one line (without its terminator) into one or more lines
pub fn split_line(line: &str) -> Vec<String> {
    match Declaration::parse(line).and_then(|decl| decl.split()) {
        Some(lines) => lines.into(),
        None => vec![line.to_string()],
    }
}
