//! Shared string utilities for identifier generation.
//!
//! Casing follows the schema naming layer the C templates were written
//! against: leading underscores, digit boundaries and acronym splits are
//! significant.

/// Strip characters that are illegal in identifiers.
///
/// Bracket, paren, dot, dash, pipe, space and slash separators become `_`;
/// everything else that is not ASCII alphanumeric or `_` is dropped.
/// A lone `$` becomes `value`.
///
/// The result only ever contains `[A-Za-z0-9_]`, so the function is idempotent.
pub fn sanitize_name(name: &str) -> String {
    if name == "$" {
        return "value".to_string();
    }

    name.replace("[]", "")
        .replace(['[', '('], "_")
        .replace([']', ')'], "")
        .replace(['.', '-', '|', ' ', '/', '\\'], "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Convert a snake, kebab, dotted or slashed name to CamelCase
/// (e.g. "phone_number" -> "PhoneNumber", "user-api" -> "UserApi").
///
/// With `lowercase_first` the prefix up to and including the first ASCII
/// letter is lowercased ("call_return" -> "callReturn").
pub fn camelize(word: &str, lowercase_first: bool) -> String {
    let mut out = String::with_capacity(word.len());
    let mut upper_next = true;

    for c in word.chars() {
        match c {
            '/' | '.' | '_' | '-' => upper_next = true,
            _ if upper_next => {
                out.extend(c.to_uppercase());
                upper_next = false;
            }
            _ => out.push(c),
        }
    }

    if lowercase_first {
        lowercase_leading(out)
    } else {
        out
    }
}

fn lowercase_leading(word: String) -> String {
    match word.find(|c: char| c.is_ascii_alphabetic()) {
        // ASCII letters are one byte wide
        Some(i) => {
            let (head, tail) = word.split_at(i + 1);
            format!("{}{}", head.to_lowercase(), tail)
        }
        None => word.to_lowercase(),
    }
}

/// Convert a CamelCase name to snake_case (e.g. "PhoneNumber" -> "phone_number").
///
/// Acronyms are split before their last capital when a lowercase word follows
/// ("HTTPServer" -> "http_server"), digits count as lowercase
/// ("Model200Response" -> "model200_response"). Existing underscores,
/// including leading ones, are preserved.
pub fn underscore(word: &str) -> String {
    let word = word.replace('.', "/").replace('$', "__");
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let is_lower = |n: Option<&char>| n.is_some_and(|n| n.is_ascii_lowercase());
            let acronym_end =
                prev.is_ascii_uppercase() && is_lower(chars.get(i + 1)) && is_lower(chars.get(i + 2));
            let word_start = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            if acronym_end || word_start {
                out.push('_');
            }
        }
        out.push(c);
    }

    out.replace(['-', ' '], "_").to_lowercase()
}

/// Escape free text for embedding in a generated string literal.
///
/// Tabs and line breaks become spaces, backslashes and double quotes are
/// backslash-escaped. Language rules layer their own quote and unsafe
/// sequence handling on top of this.
pub fn escape_text(input: &str) -> String {
    input
        .replace(['\t', '\n', '\r'], " ")
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
}

/// Check whether a name starts with an ASCII digit.
pub fn starts_with_digit(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Check whether a name consists only of uppercase ASCII letters and underscores.
///
/// The empty string qualifies.
pub fn is_upper_snake(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

/// Check whether a name is a legal C-family identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
