//! The identifier-resolution capability interface.

use super::{NameCategory, NamingConvention};

/// Resolves raw schema names into legal identifiers of a target language.
///
/// Implementations supply the category-specific pipelines; the shared
/// reserved-word, sanitizing and text-escaping stages have default
/// implementations built on the language's [`NamingConvention`].
///
/// Every method takes `&self` and must not mutate the tables it reads, so one
/// implementation can be shared by any number of generation threads.
pub trait NamingRules {
    /// The language's static naming table.
    fn convention(&self) -> &NamingConvention;

    /// Explicit replacement for a reserved word, if one is configured.
    fn reserved_word_mapping(&self, _name: &str) -> Option<&str> {
        None
    }

    /// Check if a name is illegal as a bare identifier.
    fn is_reserved_word(&self, name: &str) -> bool {
        self.convention().is_reserved(name)
    }

    /// Escape a reserved (or otherwise illegal) name.
    ///
    /// A configured mapping is used verbatim; otherwise the convention's
    /// generic escape applies.
    fn escape_reserved_word(&self, name: &str) -> String {
        match self.reserved_word_mapping(name) {
            Some(mapped) => mapped.to_string(),
            None => (self.convention().escape_reserved)(name),
        }
    }

    /// Strip characters that are illegal in identifiers.
    fn sanitize_name(&self, name: &str) -> String {
        cgen_core::sanitize_name(name)
    }

    /// Neutralize quotation marks that could terminate a generated literal.
    fn escape_quotation_mark(&self, input: &str) -> String {
        input.to_string()
    }

    /// Neutralize sequences that are unsafe in generated source.
    fn escape_unsafe_characters(&self, input: &str) -> String {
        input.to_string()
    }

    /// Escape free text for embedding in generated source or string literals.
    fn escape_text(&self, input: &str) -> String {
        let escaped = cgen_core::escape_text(input);
        self.escape_unsafe_characters(&self.escape_quotation_mark(&escaped))
    }

    fn var_name(&self, name: &str) -> String;

    fn param_name(&self, name: &str) -> String;

    fn model_name(&self, name: &str) -> String;

    fn model_filename(&self, name: &str) -> String;

    fn model_doc_filename(&self, name: &str) -> String;

    fn model_test_filename(&self, name: &str) -> String;

    fn api_name(&self, name: &str) -> String;

    fn api_filename(&self, name: &str) -> String;

    fn api_doc_filename(&self, name: &str) -> String;

    fn api_test_filename(&self, name: &str) -> String;

    fn operation_id(&self, operation_id: &str) -> String;

    /// Render an enum member's value. `datatype` is the enum's value type
    /// (`Integer`, `Float`, `String`, ...).
    fn enum_value(&self, value: &str, datatype: &str) -> String;

    /// Name an enum member. `datatype` is the enum's value type.
    fn enum_var_name(&self, name: &str, datatype: &str) -> String;

    /// Name the enum type declared for an enum-valued property.
    fn enum_name(&self, property_name: &str) -> String;

    fn api_import(&self, name: &str) -> String;

    /// Include directive for a model, from its raw schema name. Names in the
    /// import remap table are used as given; others are resolved as model types.
    fn model_import(&self, name: &str) -> String;

    /// Resolve a raw name in the given category, treating enum members as strings.
    fn resolve(&self, category: NameCategory, raw: &str) -> String {
        self.resolve_typed(category, raw, "String")
    }

    /// Resolve a raw name in the given category with an explicit enum datatype.
    fn resolve_typed(&self, category: NameCategory, raw: &str, datatype: &str) -> String {
        match category {
            NameCategory::Variable => self.var_name(raw),
            NameCategory::Parameter => self.param_name(raw),
            NameCategory::ModelType => self.model_name(raw),
            NameCategory::ModelFile => self.model_filename(raw),
            NameCategory::ApiName => self.api_name(raw),
            NameCategory::ApiFile => self.api_filename(raw),
            NameCategory::ApiTestFile => self.api_test_filename(raw),
            NameCategory::ModelTestFile => self.model_test_filename(raw),
            NameCategory::EnumValue => self.enum_value(raw, datatype),
            NameCategory::EnumVarName => self.enum_var_name(raw, datatype),
            NameCategory::EnumTypeName => self.enum_name(raw),
            NameCategory::OperationId => self.operation_id(raw),
            NameCategory::Import => self.model_import(raw),
        }
    }
}
