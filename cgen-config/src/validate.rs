//! Validation utilities for C identifiers

use miette::{NamedSource, SourceSpan};

use crate::{Error, Result};

/// Validation context that carries source information.
///
/// Errors created through a context point back into the original TOML so
/// miette can underline the offending key or value.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "cgen.toml");
/// ctx.validate_identifier("pet_", "model name prefix")?;
/// ctx.validate_replacement("default_value", "reserved word mapping")?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// The raw TOML source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// The source, named for miette reports.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Find the span of a key or string value in the source.
    pub fn find_span(&self, needle: &str) -> Option<SourceSpan> {
        find_name_span(self.src, needle)
    }

    /// Create a validation error pointing at `needle`.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Error::validation(message, self, needle)
    }

    /// Validate that a value is a legal C identifier.
    pub fn validate_identifier(&self, name: &str, kind: &str) -> Result<()> {
        match validate_identifier(name) {
            Some(reason) => Err(Error::invalid_identifier(name, kind, reason, self)),
            None => Ok(()),
        }
    }

    /// Validate that a value can stand in for a reserved word: a legal C
    /// identifier that is not itself reserved.
    pub fn validate_replacement(&self, name: &str, kind: &str) -> Result<()> {
        if is_c_keyword(name) {
            return Err(Error::reserved_word(name, kind, self));
        }
        self.validate_identifier(name, kind)
    }
}

/// C reserved words, including the C11 underscore-capital keywords.
///
/// `remove` is not a C keyword but clashes with the standard library's
/// `remove(3)` and is kept reserved for generated identifiers.
pub const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "remove", "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
    "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof",
    "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local",
];

/// Check if a name is a C reserved word (case-sensitive)
pub fn is_c_keyword(name: &str) -> bool {
    C_KEYWORDS.contains(&name)
}

/// Find the span of a key or quoted value in the TOML source.
/// Searches for `name =`, `name=` and `"name"`, then anywhere.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let patterns = [
        (format!("{} =", name), 0),   // key = ...
        (format!("{}=", name), 0),    // key=...
        (format!("\"{}\"", name), 1), // "value"
    ];

    for (pattern, skip) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    // Fallback: just find the name anywhere (less precise)
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a legal C identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("name must contain only letters, numbers, and underscores")
    }
}
