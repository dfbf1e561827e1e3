//! Type resolution traits.

use cgen_ir::Schema;

/// Lookup tables from abstract schema types to target-language types.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map an abstract schema type key (`string`, `array`, `date-time`, ...)
    /// to a target type name. `None` means the key has no mapping and should
    /// be treated as a model name.
    fn map_type(&self, abstract_type: &str) -> Option<&str>;

    /// Check whether a target type name is already native and must not be
    /// renamed as a model.
    fn is_primitive(&self, type_name: &str) -> bool;
}

/// Resolves schema nodes into declared type names and default initializers.
pub trait TypeRules {
    /// Resolve the declared type of a schema.
    ///
    /// `None` means no type can be declared at all. This only happens when the
    /// upstream schema layer could not name the schema's type, and callers
    /// must treat it as a defect in the input rather than recover from it.
    fn resolve_type(&self, schema: &Schema) -> Option<String>;

    /// Type used in declarations; by default the resolved type itself.
    fn type_declaration(&self, schema: &Schema) -> Option<String> {
        self.resolve_type(schema)
    }

    /// Default initializer for a schema, or `None` if none should be emitted.
    fn default_value(&self, schema: &Schema) -> Option<String>;

    /// Check whether a resolved type name is a native primitive.
    fn is_primitive_type(&self, type_name: &str) -> bool;
}
