//! C-specific naming conventions.

use cgen_codegen::NamingConvention;
use cgen_config::C_KEYWORDS;
use cgen_core::{camelize, underscore};

fn escape_c_reserved(name: &str) -> String {
    format!("_{}", name)
}

fn lower_camelize(name: &str) -> String {
    camelize(name, true)
}

fn upper_camelize(name: &str) -> String {
    camelize(name, false)
}

/// C naming conventions.
pub const C_NAMING: NamingConvention = NamingConvention {
    field_to_name: underscore,
    model_to_type: underscore,
    operation_to_method: lower_camelize,
    group_to_type: upper_camelize,
    reserved_words: C_KEYWORDS,
    escape_reserved: escape_c_reserved,
};
