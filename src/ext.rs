//! Extension extraction, normalization, and query specifiers.

use std::fmt;
use std::path::Path;

/// Label used for extension-less files in aggregated output.
pub const NO_EXTENSION_LABEL: &str = "[no extension]";

/// The extension token of a single file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Extension {
    /// The name has no dot-extension (`Pipfile`, `.gitignore`, `file.`).
    None,
    /// The substring after the last counting dot, upper-cased in
    /// case-insensitive mode.
    Name(String),
}

impl Extension {
    /// Extract the extension token from the final component of `path`.
    ///
    /// Splitting follows splitext rules: the separator is the last `.` in the
    /// file name, except that a leading run of dots never counts. So
    /// `.gitignore` has no extension while `.hidden_file.txt` yields `txt`,
    /// and `a.b.c.gz` yields `gz`. A trailing dot (`file.`) also yields no
    /// extension. When `case_sensitive` is false the token is upper-cased.
    ///
    /// Pure string function: no I/O, every input produces a defined output.
    pub fn extract(path: &Path, case_sensitive: bool) -> Extension {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => return Extension::None,
        };
        let lead = name.bytes().take_while(|b| *b == b'.').count();
        let ext = match name[lead..].rfind('.') {
            Some(i) => &name[lead + i + 1..],
            None => return Extension::None,
        };
        if ext.is_empty() {
            return Extension::None;
        }
        if case_sensitive {
            Extension::Name(ext.to_string())
        } else {
            Extension::Name(ext.to_ascii_uppercase())
        }
    }

    /// The key this token counts under in a frequency table.
    pub fn counter_key(&self) -> &str {
        match self {
            Extension::None => NO_EXTENSION_LABEL,
            Extension::Name(s) => s,
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.counter_key())
    }
}

/// What the user asked to match: a literal extension, files without any
/// extension (`.`), or every file regardless of extension (`..`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    Any,
    NoExtension,
    Literal(String),
}

impl Spec {
    /// Parse the CLI-boundary form: `..` → Any, `.` → NoExtension, anything
    /// else is a literal extension name (given without the dot).
    pub fn parse(raw: &str) -> Spec {
        match raw {
            ".." => Spec::Any,
            "." => Spec::NoExtension,
            other => Spec::Literal(other.to_string()),
        }
    }

    /// Whether `path` matches this specifier under the requested case mode.
    /// Literal specifiers are themselves upper-cased for comparison when
    /// case-insensitive.
    pub fn matches(&self, path: &Path, case_sensitive: bool) -> bool {
        match self {
            Spec::Any => true,
            Spec::NoExtension => Extension::extract(path, case_sensitive) == Extension::None,
            Spec::Literal(want) => {
                let want = if case_sensitive {
                    want.clone()
                } else {
                    want.to_ascii_uppercase()
                };
                Extension::extract(path, case_sensitive) == Extension::Name(want)
            }
        }
    }
}
