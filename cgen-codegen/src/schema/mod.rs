//! Upstream schema access and property extraction.
//!
//! This module provides the seam to the schema layer and the language-agnostic
//! half of property handling:
//! - [`SchemaIntrospector`] - Abstract type keys and reference resolution
//! - [`PropertyDescriptor`] - A schema property enriched with resolved names and types
//! - [`from_property`] - Base extraction shared by every target language

mod introspect;
mod property;

pub use introspect::SchemaIntrospector;
pub use property::{EnumVar, PropertyDescriptor, enum_data_type, enum_literal, enum_vars, from_property};
