//! Configuration for the cgen C client generator.
//!
//! Parses and validates `cgen.toml`. Errors carry the source text so they
//! render as annotated [`miette`] reports.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;
mod validate;

pub use config::{GeneratorConfig, GeneratorOptions};
pub use error::{Error, Result};
pub use parse::{CONFIG_FILE_NAME, parse_config};
pub use validate::{C_KEYWORDS, ParseContext, is_c_keyword};
