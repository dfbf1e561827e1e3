//! Naming conventions for target languages.

use cgen_core::starts_with_digit;

/// Language-specific naming conventions.
///
/// Defines how raw names are cased per usage and how reserved words are
/// escaped. Instances are `const` tables; runtime adjustments (such as
/// explicit reserved-word remappings) live on the [`NamingRules`](super::NamingRules)
/// implementation.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a field name to a variable name (e.g., "PhoneNumber" -> "phone_number")
    pub field_to_name: fn(&str) -> String,
    /// Transform a schema name to a model type name (e.g., "PhoneNumber" -> "phone_number")
    pub model_to_type: fn(&str) -> String,
    /// Transform an operation id to a method name (e.g., "get_pet" -> "getPet")
    pub operation_to_method: fn(&str) -> String,
    /// Transform an API group name to a type name (e.g., "store" -> "Store")
    pub group_to_type: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "int" -> "_int" in C)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    ///
    /// Membership is case-sensitive.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name cannot be used as a bare identifier: reserved, or
    /// starting with a digit.
    pub fn needs_escape(&self, name: &str) -> bool {
        self.is_reserved(name) || starts_with_digit(name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.needs_escape(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }
}
