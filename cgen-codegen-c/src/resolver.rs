//! C identifier resolution.

use std::sync::Arc;

use cgen_codegen::{Diagnostics, NameCategory, NamingConvention, NamingRules};
use cgen_config::GeneratorConfig;
use cgen_core::{camelize, is_upper_snake, starts_with_digit};
use indexmap::IndexMap;

use crate::C_NAMING;

const RESERVED: &str = "reserved word";
const LEADING_DIGIT: &str = "starting with a number";

/// Resolves raw schema names into C identifiers, file names and includes.
///
/// Every corrective rename is reported to the shared [`Diagnostics`].
#[derive(Debug, Clone)]
pub struct CNaming {
    reserved_word_mappings: IndexMap<String, String>,
    import_mappings: IndexMap<String, String>,
    model_name_prefix: Option<String>,
    model_name_suffix: Option<String>,
    api_package: String,
    diagnostics: Arc<Diagnostics>,
}

impl CNaming {
    /// Create a resolver with the default configuration.
    pub fn new(diagnostics: Arc<Diagnostics>) -> Self {
        Self::from_config(&GeneratorConfig::default(), diagnostics)
    }

    /// Create a resolver from a generator configuration.
    pub fn from_config(config: &GeneratorConfig, diagnostics: Arc<Diagnostics>) -> Self {
        let options = &config.generator;
        Self {
            reserved_word_mappings: config.reserved_word_mappings.clone(),
            import_mappings: config.import_mappings.clone(),
            model_name_prefix: options.model_name_prefix().map(str::to_string),
            model_name_suffix: options.model_name_suffix().map(str::to_string),
            api_package: options.api_package.clone(),
            diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    pub fn api_package(&self) -> &str {
        &self.api_package
    }

    /// Why a name cannot be used as a bare identifier, if it cannot.
    fn rename_reason(&self, name: &str) -> Option<&'static str> {
        if self.is_reserved_word(name) {
            Some(RESERVED)
        } else if starts_with_digit(name) {
            Some(LEADING_DIGIT)
        } else {
            None
        }
    }

    fn report(&self, original: &str, renamed: &str, reason: &str, category: NameCategory) {
        self.diagnostics
            .renamed(original, renamed, reason, category.usage());
    }

    /// Escape a name that is reserved or starts with a digit.
    fn escape_identifier(&self, name: String, category: NameCategory) -> String {
        match self.rename_reason(&name) {
            Some(reason) => {
                let escaped = self.escape_reserved_word(&name);
                self.report(&name, &escaped, reason, category);
                escaped
            }
            None => name,
        }
    }

    /// Upper-case an already camelized name for use as an enum identifier.
    fn enum_identifier(&self, camelized: &str, category: NameCategory) -> String {
        let upper = camelized.to_uppercase();
        let stripped = upper.strip_prefix('_').unwrap_or(&upper);
        let stripped = stripped.strip_suffix('_').unwrap_or(stripped);
        if starts_with_digit(stripped) {
            let escaped = self.escape_reserved_word(stripped);
            self.report(stripped, &escaped, LEADING_DIGIT, category);
            escaped
        } else {
            stripped.to_string()
        }
    }
}

fn is_numeric(datatype: &str) -> bool {
    matches!(datatype, "Integer" | "Float")
}

impl NamingRules for CNaming {
    fn convention(&self) -> &NamingConvention {
        &C_NAMING
    }

    fn reserved_word_mapping(&self, name: &str) -> Option<&str> {
        self.reserved_word_mappings.get(name).map(String::as_str)
    }

    fn escape_quotation_mark(&self, input: &str) -> String {
        input.replace('\'', "")
    }

    fn escape_unsafe_characters(&self, input: &str) -> String {
        input.replace("=end", "=_end").replace("=begin", "=_begin")
    }

    fn var_name(&self, name: &str) -> String {
        let mut name = self.sanitize_name(name);
        if is_upper_snake(&name) {
            name = name.to_lowercase();
        }
        let name = (self.convention().field_to_name)(&name);
        self.escape_identifier(name, NameCategory::Variable)
    }

    fn param_name(&self, name: &str) -> String {
        match self.rename_reason(name) {
            Some(reason) => {
                let renamed = self.escape_reserved_word(name).replace('-', "_");
                self.report(name, &renamed, reason, NameCategory::Parameter);
                renamed
            }
            None => name.replace('-', "_"),
        }
    }

    fn model_name(&self, name: &str) -> String {
        let mut name = self.sanitize_name(name);
        if let Some(prefix) = &self.model_name_prefix {
            name = format!("{prefix}_{name}");
        }
        if let Some(suffix) = &self.model_name_suffix {
            name = format!("{name}_{suffix}");
        }

        let to_type = self.convention().model_to_type;
        let snake = to_type(&name);

        // `Return` only becomes reserved once snake-cased
        let (renamed, reason) = if self.is_reserved_word(&name) || self.is_reserved_word(&snake) {
            (format!("Model{}", camelize(&name, false)), RESERVED)
        } else if starts_with_digit(&name) {
            (format!("model_{name}"), LEADING_DIGIT)
        } else {
            return snake;
        };

        let renamed = to_type(&renamed);
        self.report(&name, &renamed, reason, NameCategory::ModelType);
        renamed
    }

    fn model_filename(&self, name: &str) -> String {
        (self.convention().model_to_type)(&self.model_name(name))
    }

    fn model_doc_filename(&self, name: &str) -> String {
        self.model_name(name)
    }

    fn model_test_filename(&self, name: &str) -> String {
        format!("test_{}", self.model_filename(name)).replace('_', "-")
    }

    fn api_name(&self, name: &str) -> String {
        if name.is_empty() {
            return "DefaultApi".to_string();
        }
        format!("{}API", (self.convention().group_to_type)(name))
    }

    fn api_filename(&self, name: &str) -> String {
        format!(
            "{}API",
            (self.convention().group_to_type)(&name.replace('-', "_"))
        )
    }

    fn api_doc_filename(&self, name: &str) -> String {
        self.api_name(name)
    }

    fn api_test_filename(&self, name: &str) -> String {
        format!("test_{}", self.api_filename(name)).replace('_', "-")
    }

    fn operation_id(&self, operation_id: &str) -> String {
        let to_method = self.convention().operation_to_method;
        let method = to_method(&self.sanitize_name(operation_id));

        let reason = self
            .rename_reason(operation_id)
            .or_else(|| self.rename_reason(&method));
        match reason {
            Some(reason) => {
                let renamed = to_method(&self.sanitize_name(&format!("call_{operation_id}")));
                self.report(operation_id, &renamed, reason, NameCategory::OperationId);
                renamed
            }
            None => method,
        }
    }

    fn enum_value(&self, value: &str, datatype: &str) -> String {
        let mut value = value.replace('-', "_");
        if self.is_reserved_word(&value) {
            let escaped = self.escape_reserved_word(&value);
            self.report(&value, &escaped, RESERVED, NameCategory::EnumValue);
            value = escaped;
        }

        if is_numeric(datatype) {
            return value;
        }

        let escaped = self.escape_text(&value);
        if starts_with_digit(&value) {
            let renamed = self.escape_reserved_word(&escaped);
            self.report(&value, &renamed, LEADING_DIGIT, NameCategory::EnumValue);
            renamed
        } else {
            escaped
        }
    }

    fn enum_var_name(&self, name: &str, datatype: &str) -> String {
        if name.is_empty() {
            return "EMPTY".to_string();
        }

        if is_numeric(datatype) {
            return name
                .replace('-', "MINUS_")
                .replace('+', "PLUS_")
                .replace('.', "_DOT_");
        }

        let camelized = camelize(&self.sanitize_name(name), false);
        self.enum_identifier(&camelized, NameCategory::EnumVarName)
    }

    fn enum_name(&self, property_name: &str) -> String {
        let camelized = camelize(&self.model_name(property_name), false);
        self.enum_identifier(&camelized, NameCategory::EnumTypeName)
    }

    fn api_import(&self, name: &str) -> String {
        format!("{}/{}", self.api_package, self.api_filename(name))
    }

    fn model_import(&self, name: &str) -> String {
        let header = match self.import_mappings.get(name) {
            Some(mapped) => mapped.clone(),
            None => self.model_name(name),
        };
        format!("#include \"../model/{}.h\"", header)
    }
}
