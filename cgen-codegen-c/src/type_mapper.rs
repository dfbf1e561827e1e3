//! C type mapper implementation.

use cgen_codegen::TypeMapper;
use indexmap::IndexMap;

/// Abstract schema type keys and their C spellings.
///
/// `float` -> `double` and `double` -> `float` look swapped; the C templates
/// depend on exactly these spellings, so they are kept as-is.
pub const DEFAULT_TYPE_MAP: &[(&str, &str)] = &[
    ("string", "char"),
    ("char", "char"),
    ("integer", "int"),
    ("long", "long"),
    ("float", "double"),
    ("double", "float"),
    ("number", "float"),
    ("date", "char"),
    ("DateTime", "char"),
    ("boolean", "int"),
    ("file", "binary_t*"),
    ("binary", "binary_t*"),
    ("ByteArray", "char"),
    ("UUID", "char"),
    ("URI", "char"),
    ("array", "list"),
    ("map", "list_t*"),
    ("date-time", "char"),
];

/// C type names that are already native and bypass model renaming.
pub const C_PRIMITIVES: &[&str] = &[
    "int", "short", "long", "float", "double", "char", "binary_t*", "Object", "list_t*", "list",
];

/// C type mapper implementation.
///
/// Built once per generation run; the tables are never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CTypeMapper {
    types: IndexMap<String, String>,
}

impl Default for CTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl CTypeMapper {
    /// Create a mapper with the default C type map.
    pub fn new() -> Self {
        Self {
            types: DEFAULT_TYPE_MAP
                .iter()
                .map(|(key, ty)| (key.to_string(), ty.to_string()))
                .collect(),
        }
    }

    /// Create a mapper with `overrides` merged over the default type map.
    pub fn with_overrides<'a>(overrides: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let mut mapper = Self::new();
        for (key, ty) in overrides {
            mapper.types.insert(key.clone(), ty.clone());
        }
        mapper
    }
}

impl TypeMapper for CTypeMapper {
    fn language(&self) -> &'static str {
        "c"
    }

    fn map_type(&self, abstract_type: &str) -> Option<&str> {
        self.types.get(abstract_type).map(String::as_str)
    }

    fn is_primitive(&self, type_name: &str) -> bool {
        C_PRIMITIVES.contains(&type_name)
    }
}
