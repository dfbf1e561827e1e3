//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`NamingRules`] - Identifier resolution per [`NameCategory`]
//! - [`NamingConvention`] - Reserved words, escaping and casing of a language
//! - [`TypeRules`] - Resolving schema nodes to declared type names and defaults
//! - [`TypeMapper`] - Abstract schema type to target type table lookups
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TemplateRenderer`] - The external template engine seam

mod category;
mod naming;
mod rules;
mod traits;
mod types;

pub use category::NameCategory;
pub use naming::NamingConvention;
pub use rules::NamingRules;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TemplateRenderer};
pub use types::{TypeMapper, TypeRules};
