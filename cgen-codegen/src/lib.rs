//! Language-agnostic naming and typing layer for the cgen generator.
//!
//! Target languages plug into this crate by implementing the capability
//! traits in [`language`]; everything else here works against those traits.
//!
//! # Module Organization
//!
//! - [`language`] - Naming/type capability traits, reserved-word conventions, generator traits
//! - [`schema`] - Upstream schema introspection and property extraction
//! - [`diagnostic`] - Diagnostics emitted while resolving names and processing files
//! - [`generation`] - Include collection and post-generation command plumbing
//! - [`testing`] - Test utilities (feature-gated)

pub mod diagnostic;
pub mod generation;
pub mod language;
pub mod schema;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use diagnostic::{Diagnostic, Diagnostics, Rename, Severity};
pub use language::{
    GenerateResult, LanguageCodegen, NameCategory, NamingConvention, NamingRules, PreviewFile,
    TemplateRenderer, TypeMapper, TypeRules,
};
pub use schema::{EnumVar, PropertyDescriptor, SchemaIntrospector, from_property};
