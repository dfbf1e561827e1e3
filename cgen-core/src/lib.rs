//! Core utilities and types for the cgen C client generator.
//!
//! This crate provides the string transforms and file primitives shared by
//! every other cgen crate.

mod file;
mod types;
mod utils;

// File operations
pub use file::File;
// Fundamental types
pub use types::FileType;
// String utilities
pub use utils::{
    camelize, escape_text, is_identifier, is_upper_snake, sanitize_name, starts_with_digit,
    underscore,
};
